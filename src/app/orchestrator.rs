//! Main application orchestrator.
//!
//! Sets up verbose logging, dispatches the selected subcommand and prints its
//! results:
//! - `check`: loads a board and reports whether a submitted word is on it.
//! - `solve`: loads a board and a dictionary, enumerates every word on the
//!   board, optionally compares against a player's found words and writes
//!   the result files.
//!
//! The verbose log is flushed after each stage unless `--quiet` is given.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use super::cli::{Cli, Command};
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println};
use crate::search::BoardExplorer;

/// Runs the application for parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` when an input file cannot be read or parsed, a
/// submission is blank, or a result file cannot be written.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log) {
            // Keep going without the file log.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log.display(),
                e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to {}", cli.log.display());
            flush_log(quiet_mode, "initialization");
        }
    }

    let result = match &cli.command {
        Command::Check { grid, word, path } => run_check(grid, word, *path, quiet_mode),
        Command::Solve {
            grid,
            dict,
            found,
            output,
            report,
        } => run_solve(
            grid,
            dict,
            found.as_deref(),
            output.as_deref(),
            report.as_deref(),
            quiet_mode,
        ),
    };

    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "[ERROR] {}", e);
    }
    flush_log(quiet_mode, "final");
    result
}

fn run_check(grid_path: &Path, input: &str, show_path: bool, quiet_mode: bool) -> Result<(), AppError> {
    let word = processing::normalize_submission(input)?;
    let grid = processing::load_board(grid_path, quiet_mode)?;
    flush_log(quiet_mode, "loading the board");

    match processing::check_word(&grid, &word, quiet_mode) {
        Some(cells) => {
            println!("✔ {} is on the board.", word);
            if show_path {
                println!("  {}", processing::format_path(&grid, &cells));
            }
        }
        None => println!("❌ {} is NOT on the board.", word),
    }
    Ok(())
}

fn run_solve(
    grid_path: &Path,
    dict_path: &Path,
    found_path: Option<&Path>,
    output_path: Option<&Path>,
    report_path: Option<&Path>,
    quiet_mode: bool,
) -> Result<(), AppError> {
    let grid = processing::load_board(grid_path, quiet_mode)?;
    flush_log(quiet_mode, "loading the board");

    let prefixes = processing::load_prefixes(dict_path, quiet_mode)?;
    flush_log(quiet_mode, "loading the dictionary");

    let solutions = processing::solve_board(&grid, &prefixes, quiet_mode);
    flush_log(quiet_mode, "enumerating words");

    println!("All valid words ({}):", solutions.len());
    for word in &solutions {
        println!("  {}", word);
    }

    if let Some(found_path) = found_path {
        let found_words = processing::load_found_words(found_path, quiet_mode)?;
        let summary = processing::summarize_round(&solutions, &found_words);
        print_word_section("Words found", &summary.found);
        print_word_section("Missed words", &summary.missed);
        print_word_section("Not valid for this board", &summary.unlisted);
        print_word_section("Already found", &summary.repeated);
    }

    if let Some(output_path) = output_path {
        write_word_list(output_path, &solutions, quiet_mode)?;
    }
    if let Some(report_path) = report_path {
        write_report(report_path, &grid, &solutions, quiet_mode)?;
    }
    Ok(())
}

fn print_word_section(title: &str, words: &[String]) {
    println!("{} ({}):", title, words.len());
    for word in words {
        println!("  {}", word);
    }
}

fn write_word_list(
    output_path: &Path,
    solutions: &BTreeSet<String>,
    quiet_mode: bool,
) -> Result<(), AppError> {
    let mut content = String::with_capacity(solutions.iter().map(|w| w.len() + 1).sum());
    for word in solutions {
        content.push_str(word);
        content.push('\n');
    }
    file_handler::write_content_to_file(output_path, &content).map_err(|e| {
        verbose_eprintln!(
            quiet_mode,
            "[ERROR] Failed to write word list ({}): {}",
            output_path.display(),
            e
        );
        AppError::Io(e)
    })?;
    verbose_println!(quiet_mode, "\n[INFO] Word list written to {}", output_path.display());
    Ok(())
}

fn write_report(
    report_path: &Path,
    grid: &crate::board::Grid,
    solutions: &BTreeSet<String>,
    quiet_mode: bool,
) -> Result<(), AppError> {
    let mut writer = file_handler::init_report_writer(report_path)?;
    BoardExplorer::print_solutions_to_writer(grid, solutions, &mut writer)?;
    writer.flush()?;
    verbose_println!(quiet_mode, "[INFO] Report written to {}", report_path.display());
    Ok(())
}

fn flush_log(quiet_mode: bool, stage: &str) {
    if quiet_mode {
        return;
    }
    if let Err(e) = logger::flush_global_logger() {
        // Report on stderr: the log file itself is what failed.
        eprintln!("[WARNING] Failed to flush verbose log after {}: {}", stage, e);
    }
}

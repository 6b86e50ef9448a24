//! Individual stages of a `check` or `solve` run.
//!
//! Each stage loads or searches, logs what it did and hands the result back to
//! the orchestrator. The board search itself lives in `crate::search`.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::time::Instant;

use super::error::AppError;
use super::file_handler;
use super::verbose_println;
use crate::board::{Cell, Grid};
use crate::loader;
use crate::search::{self, PrefixSet};

/// Outcome of comparing a player's found words with the board's solutions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// Found words that are solutions.
    pub found: Vec<String>,
    /// Solutions the player did not find.
    pub missed: Vec<String>,
    /// Found words that are not solutions for this dictionary.
    pub unlisted: Vec<String>,
    /// Words submitted more than once; each counts only the first time.
    pub repeated: Vec<String>,
}

/// Normalizes a submitted word the way the game does: trimmed and uppercased.
///
/// # Errors
/// Returns `AppError::InvalidWord` for a blank submission.
pub fn normalize_submission(input: &str) -> Result<String, AppError> {
    let word = input.trim().to_uppercase();
    if word.is_empty() {
        return Err(AppError::InvalidWord("Enter a word!".to_string()));
    }
    Ok(word)
}

/// Splits the found words into solutions and extras, lists what was missed
/// and which words were submitted again after already being found.
/// All lists are sorted.
pub fn summarize_round(solutions: &BTreeSet<String>, found_words: &[String]) -> RoundSummary {
    let mut found_set: HashSet<String> = HashSet::new();
    let mut repeated: BTreeSet<String> = BTreeSet::new();
    for word in found_words.iter().map(|w| w.trim().to_uppercase()) {
        if word.is_empty() {
            continue;
        }
        if found_set.contains(&word) {
            repeated.insert(word);
        } else {
            found_set.insert(word);
        }
    }

    let missed = solutions
        .iter()
        .filter(|word| !found_set.contains(*word))
        .cloned()
        .collect();

    let (mut found, mut unlisted): (Vec<String>, Vec<String>) = found_set
        .into_iter()
        .partition(|word| solutions.contains(word));
    found.sort_unstable();
    unlisted.sort_unstable();

    RoundSummary {
        found,
        missed,
        unlisted,
        repeated: repeated.into_iter().collect(),
    }
}

/// Loads the board file and logs its shape.
pub fn load_board(grid_path: &Path, quiet_mode: bool) -> Result<Grid, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading board from {}...", grid_path.display());
    file_handler::validate_input_file(grid_path, quiet_mode)?;

    let grid = loader::load_grid_from_file(grid_path)?;
    if grid.is_empty() {
        verbose_println!(quiet_mode, "   => Board is empty.");
    } else {
        verbose_println!(
            quiet_mode,
            "   => Loaded {} x {} board:\n{}",
            grid.rows(),
            grid.cols(),
            grid
        );
    }
    Ok(grid)
}

/// Loads the dictionary file and builds its prefix set.
pub fn load_prefixes(dict_path: &Path, quiet_mode: bool) -> Result<PrefixSet, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 2] Loading dictionary from {}...", dict_path.display());
    file_handler::validate_input_file(dict_path, quiet_mode)?;

    let words = loader::load_dictionary_from_file(dict_path)?;
    let started = Instant::now();
    let prefixes = PrefixSet::build(&words);
    verbose_println!(
        quiet_mode,
        "   => {} words, {} prefixes (built in {:?}).",
        prefixes.word_count(),
        prefixes.prefix_count(),
        started.elapsed()
    );
    Ok(prefixes)
}

/// Loads a list of words the player found.
pub fn load_found_words(found_path: &Path, quiet_mode: bool) -> Result<Vec<String>, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 4] Loading found words from {}...", found_path.display());
    file_handler::validate_input_file(found_path, quiet_mode)?;

    let found = loader::load_word_list_from_file(found_path)?;
    verbose_println!(quiet_mode, "   => {} found word(s).", found.len());
    Ok(found)
}

/// Looks for `word` on the board, returning the path that spells it.
pub fn check_word(grid: &Grid, word: &str, quiet_mode: bool) -> Option<Vec<Cell>> {
    verbose_println!(quiet_mode, "\n[STEP 2] Tracing {} on the board...", word);
    let path = search::find_word_path(word, grid);
    match &path {
        Some(cells) => verbose_println!(quiet_mode, "   => Found along {}", format_path(grid, cells)),
        None => verbose_println!(quiet_mode, "   => No path spells {}.", word),
    }
    path
}

/// Enumerates every dictionary word on the board.
pub fn solve_board(grid: &Grid, prefixes: &PrefixSet, quiet_mode: bool) -> BTreeSet<String> {
    verbose_println!(quiet_mode, "\n[STEP 3] Enumerating words on the board...");
    let started = Instant::now();
    let words = search::find_all_board_words_with_prefixes(grid, prefixes);
    verbose_println!(
        quiet_mode,
        "   => Found {} word(s) in {:?}.",
        words.len(),
        started.elapsed()
    );
    words
}

/// Renders a path as `C(0, 0) -> A(0, 1) -> T(1, 0)`.
pub fn format_path(grid: &Grid, cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|&cell| {
            let letter = grid
                .get(cell)
                .map(|ch| ch.to_uppercase().to_string())
                .unwrap_or_default();
            format!("{}{}", letter, cell)
        })
        .collect::<Vec<String>>()
        .join(" -> ")
}

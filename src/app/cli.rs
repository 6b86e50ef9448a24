use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Checks words against a letter board and finds every dictionary word on it.", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,

    /// Suppress verbose logging, only printing results and errors.
    #[clap(short, long, global = true)]
    pub quiet: bool,

    /// File receiving verbose log output.
    #[clap(long, global = true, default_value = "boggle.log")]
    pub log: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether a submitted word can be traced on the board
    Check {
        /// Board file (one row per line)
        #[clap(short, long)]
        grid: PathBuf,

        /// Word to look for
        word: String,

        /// Also print the cells spelling the word
        #[clap(long)]
        path: bool,
    },

    /// Find every dictionary word that can be traced on the board
    Solve {
        /// Board file (one row per line)
        #[clap(short, long)]
        grid: PathBuf,

        /// Dictionary file (one word per line)
        #[clap(short, long)]
        dict: PathBuf,

        /// Words a player already found; reports the ones they missed
        #[clap(long)]
        found: Option<PathBuf>,

        /// Write the sorted word list to this file
        #[clap(short, long)]
        output: Option<PathBuf>,

        /// Write the board and its solutions to this report file
        #[clap(long)]
        report: Option<PathBuf>,
    },
}

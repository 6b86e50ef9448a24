mod cli;
mod error;
mod file_handler;
mod logger;
mod orchestrator;
mod processing;

pub use cli::{Cli, Command};
pub use error::AppError;
pub use orchestrator::run_app;
pub use processing::{normalize_submission, summarize_round, RoundSummary};

// Macros for use by child modules of app (orchestrator, processing, file_handler)
// These macros call functions from the app::logger module.
// `super::logger` resolves because the macros expand inside sibling modules,
// where `super` is the `app` module.
macro_rules! verbose_println {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_message_args(format_args!($($arg)*));
        }
    };
}

macro_rules! verbose_eprintln {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_error_args(format_args!($($arg)*));
        }
    };
}

use verbose_eprintln;
use verbose_println;

//! File system helpers for the command-line front end.
//!
//! Validates input paths before loading, writes result files and opens the
//! report writer. Uses the verbose logging macros from the parent `app` module.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Checks that `file_path` exists and is a regular file.
///
/// # Arguments
/// * `file_path` - Path of the board, dictionary or word list to read.
/// * `quiet_mode` - Suppresses verbose logging if true.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path is missing or not a file.
pub fn validate_input_file(file_path: &Path, quiet_mode: bool) -> Result<(), AppError> {
    if !file_path.exists() {
        let error_msg = format!("File not found: {}", file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if !file_path.is_file() {
        let error_msg = format!("Path is not a file: {}", file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    Ok(())
}

/// Writes string content to a file, creating or truncating it.
///
/// # Errors
/// Returns an `IoError` if opening, writing or flushing fails.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Opens a buffered writer for the solutions report, truncating old content.
/// The caller flushes it once the report is complete.
pub fn init_report_writer(file_path: &Path) -> Result<BufWriter<File>, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    Ok(BufWriter::new(file))
}

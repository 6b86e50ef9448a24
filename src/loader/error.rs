use thiserror::Error;

use crate::board::GridError;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for board and word-list loading.
/// Represents the ways reading a grid or dictionary file can fail before
/// any search runs.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Error when reading a file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when the grid file does not describe a rectangular board.
    #[error("Failed to parse grid from '{0}': {1}")]
    ParseGrid(String, GridError),

    /// Error when a dictionary file holds no usable words.
    #[error("No words found in dictionary file '{0}'")]
    EmptyDictionary(String),
}

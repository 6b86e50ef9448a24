use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Loading error: {0}")]
    Load(#[from] crate::loader::LoaderError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("Invalid word: {0}")]
    InvalidWord(String),
}

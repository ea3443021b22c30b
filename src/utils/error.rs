use std::io;
use thiserror::Error;

/// Common result type for revealtoc operations
pub type BoxResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Error types for revealtoc operations
#[derive(Debug, Error)]
pub enum TocError {
    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
    /// The presentation document could not be read or modified
    #[error("Document error: {0}")]
    Document(String),
    /// Generic error message
    #[error("{0}")]
    Generic(String),
}

impl From<String> for TocError {
    fn from(msg: String) -> Self {
        TocError::Generic(msg)
    }
}

impl From<&str> for TocError {
    fn from(msg: &str) -> Self {
        TocError::Generic(msg.to_string())
    }
}

use std::io;
use thiserror::Error;

/// Error type for movie collection operations.
#[derive(Error, Debug)]
pub enum MovieError {
    /// A required movie field was empty.
    #[error("The {field} cannot be empty")]
    InvalidArgument {
        /// Name of the first offending field.
        field: &'static str,
    },

    /// A line of input did not name a known command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Input ended while a prompt was waiting for an answer.
    #[error("Input closed while waiting for a response")]
    InputClosed,

    /// IO error from console or seed file access.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Seed deserialization error.
    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias for movie collection operations.
pub type Result<T> = std::result::Result<T, MovieError>;

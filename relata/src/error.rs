//! Error types for relata.

use thiserror::Error;

/// Result type for relata operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for relata operations.
///
/// These are real failures (unreadable or malformed input). Movies that are
/// merely missing usable data end in a [`crate::pipeline::Skip`], which is
/// not an error.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/decode error, including malformed interim rows.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Output serialization error.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

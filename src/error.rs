//! Error types for the typogen library.
//!
//! All errors are represented by the [`TypogenError`] enum. Configuration
//! problems (an invalid probability, a negative weight) are raised once, when
//! a policy is constructed; per-query problems never surface as errors — the
//! query is passed through unchanged so a single bad input cannot abort a
//! batch.

use std::io;

use thiserror::Error;

/// The main error type for typogen operations.
#[derive(Error, Debug)]
pub enum TypogenError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid policy configuration (probability out of range, bad weights)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input data (malformed query file, empty query)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with TypogenError.
pub type Result<T> = std::result::Result<T, TypogenError>;

impl TypogenError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TypogenError::Config(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        TypogenError::InvalidInput(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TypogenError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TypogenError::config("probability must be in [0, 1]");
        assert_eq!(
            err.to_string(),
            "Configuration error: probability must be in [0, 1]"
        );

        let err = TypogenError::invalid_input("missing tab separator");
        assert_eq!(err.to_string(), "Invalid input: missing tab separator");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err: TypogenError = io_err.into();
        assert!(matches!(err, TypogenError::Io(_)));
    }
}

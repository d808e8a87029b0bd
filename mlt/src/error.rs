//! Error handling module for the mlt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

use mathlang_lex::LexError;

/// Main error type for the mlt CLI application.
#[derive(Error, Debug)]
pub enum MltError {
    /// Error when the configuration cannot be found, read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be opened.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error raised by the token reader.
    #[error("{0}")]
    Lex(#[from] LexError),

    /// Error when one or more files failed `mlt check`.
    #[error("{0} file(s) failed to tokenize")]
    CheckFailed(usize),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using MltError.
pub type Result<T> = std::result::Result<T, MltError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = MltError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = MltError::FileOperation("permission denied".to_string());
        assert_eq!(err.to_string(), "File operation failed: permission denied");
    }

    #[test]
    fn test_check_failed_display() {
        assert_eq!(MltError::CheckFailed(2).to_string(), "2 file(s) failed to tokenize");
    }

    #[test]
    fn test_lex_error_conversion() {
        let lex_err = mathlang_lex::tokenize("9z").unwrap_err();
        let err: MltError = lex_err.into();
        assert!(matches!(err, MltError::Lex(_)));
        assert_eq!(err.to_string(), "malformed number '9z' at 1:1");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MltError = io_err.into();
        assert!(matches!(err, MltError::Io(_)));
    }
}

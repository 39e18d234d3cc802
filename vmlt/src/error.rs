//! Error handling module for the vmlt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the vmlt CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of vmlt commands. Note that scanning itself never
/// fails; errors here come from the surrounding I/O, configuration, and
/// argument handling.
#[derive(Error, Debug)]
pub enum VmltError {
    /// Error when a required configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using VmltError.
///
/// This type alias simplifies function signatures by providing
/// a consistent result type throughout the application.
pub type Result<T> = std::result::Result<T, VmltError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VmltError::Config("missing format".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing format");

        let err = VmltError::Validation("unknown kind".to_string());
        assert_eq!(err.to_string(), "Validation error: unknown kind");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: VmltError = io_err.into();
        assert!(matches!(err, VmltError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }
}

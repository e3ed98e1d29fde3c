//! Error types for the sales analytics pipeline
//!
//! This module defines the errors that can surface from pipeline stages.
//! Malformed lines and invalid records are not errors: they are dropped and
//! counted by the parser and validator.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: Input file missing, output not writable
//! - **Decoding Errors**: Input bytes not valid in any supported encoding
//! - **Catalog Errors**: Catalog service unreachable, timed out, or bad payload
//! - **Parameter Errors**: Filter thresholds that are not numbers, prompt failures

use thiserror::Error;

/// Main error type for the pipeline
///
/// Each variant includes enough context to be reported to the operator
/// as a single log line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SalesError {
    /// File not found at the specified path
    ///
    /// Halts the read stage; the pipeline continues with no records.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Input could not be decoded with any supported encoding
    #[error("Unable to decode '{path}' with any supported encoding")]
    Decode {
        /// The file that failed to decode
        path: String,
    },

    /// Catalog service request failed
    ///
    /// Never fatal: the enricher treats it as an empty catalog.
    #[error("Catalog fetch failed: {message}")]
    Catalog {
        /// Description of the failure
        message: String,
    },

    /// A filter threshold could not be parsed as a number
    #[error("Invalid amount '{value}'")]
    InvalidAmount {
        /// The rejected input text
        value: String,
    },

    /// Reading interactive input failed
    #[error("Prompt failed: {message}")]
    Prompt {
        /// Description of the failure
        message: String,
    },
}

impl From<std::io::Error> for SalesError {
    fn from(error: std::io::Error) -> Self {
        SalesError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for SalesError {
    fn from(error: reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            format!("request timed out ({error})")
        } else {
            error.to_string()
        };
        SalesError::Catalog { message }
    }
}

// Helper functions for creating common errors

impl SalesError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        SalesError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a Decode error
    pub fn decode(path: &str) -> Self {
        SalesError::Decode {
            path: path.to_string(),
        }
    }

    /// Create a Catalog error
    pub fn catalog(message: &str) -> Self {
        SalesError::Catalog {
            message: message.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(value: &str) -> Self {
        SalesError::InvalidAmount {
            value: value.to_string(),
        }
    }

    /// Create a Prompt error
    pub fn prompt(message: &str) -> Self {
        SalesError::Prompt {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        SalesError::FileNotFound { path: "sales.txt".to_string() },
        "File not found: sales.txt"
    )]
    #[case::io_error(
        SalesError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::decode(
        SalesError::Decode { path: "sales.txt".to_string() },
        "Unable to decode 'sales.txt' with any supported encoding"
    )]
    #[case::catalog(
        SalesError::Catalog { message: "connection refused".to_string() },
        "Catalog fetch failed: connection refused"
    )]
    #[case::invalid_amount(
        SalesError::InvalidAmount { value: "abc".to_string() },
        "Invalid amount 'abc'"
    )]
    #[case::prompt(
        SalesError::Prompt { message: "stdin closed".to_string() },
        "Prompt failed: stdin closed"
    )]
    fn test_error_display(#[case] error: SalesError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::file_not_found(
        SalesError::file_not_found("sales.txt"),
        SalesError::FileNotFound { path: "sales.txt".to_string() }
    )]
    #[case::decode(
        SalesError::decode("sales.txt"),
        SalesError::Decode { path: "sales.txt".to_string() }
    )]
    #[case::catalog(
        SalesError::catalog("timeout"),
        SalesError::Catalog { message: "timeout".to_string() }
    )]
    #[case::invalid_amount(
        SalesError::invalid_amount("1,2x"),
        SalesError::InvalidAmount { value: "1,2x".to_string() }
    )]
    fn test_helper_functions(#[case] result: SalesError, #[case] expected: SalesError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: SalesError = io_error.into();
        assert!(matches!(error, SalesError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}

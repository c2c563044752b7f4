//! Error handling for chronological sorting and date normalization

use std::io;
use thiserror::Error;

/// Custom error type for sort and date operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("invalid date format: {value}")]
    InvalidDateFormat { value: String },

    #[error("Record decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::FileNotFound { .. } | SortError::Io(_) => crate::SORT_FAILURE,
            _ => crate::EXIT_FAILURE,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        SortError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create an invalid date format error
    pub fn invalid_date_format(value: &str) -> Self {
        SortError::InvalidDateFormat {
            value: value.to_string(),
        }
    }

    /// Create an internal error
    pub fn internal(message: &str) -> Self {
        SortError::Internal {
            message: message.to_string(),
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Context trait for adding context to errors
pub trait SortContext<T> {
    fn with_file_context(self, filename: &str) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_file_context(self, filename: &str) -> SortResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::NotFound => SortError::file_not_found(filename),
            _ => SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename, io_err),
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_format_message() {
        let err = SortError::invalid_date_format("2023-01-01a");
        assert_eq!(err.to_string(), "invalid date format: 2023-01-01a");
        assert_eq!(err.exit_code(), crate::EXIT_FAILURE);
    }

    #[test]
    fn test_io_errors_use_sort_failure_code() {
        let err = SortError::file_not_found("expenses.json");
        assert_eq!(err.exit_code(), crate::SORT_FAILURE);
    }

    #[test]
    fn test_file_context_maps_not_found() {
        let io_err: Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let err = io_err.with_file_context("expenses.json").unwrap_err();
        assert!(matches!(err, SortError::FileNotFound { file } if file == "expenses.json"));
    }
}

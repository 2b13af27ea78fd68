//! Error handling for the natural sort pipeline

use std::io;
use thiserror::Error;

/// Custom error type for sort operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("file does not exist: {file}")]
    FileNotFound { file: String },

    #[error("invalid separator: {sep:?} (expected exactly one character)")]
    InvalidSeparator { sep: String },

    #[error("no valid input (use --input or --input-file)")]
    MissingInput,

    #[error("failed to decode input: {message}")]
    Decode { message: String },

    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("interrupted")]
    Interrupted,

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl SortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::Io(_) | SortError::FileNotFound { .. } => crate::SORT_FAILURE,
            SortError::Interrupted => crate::EXIT_INTERRUPTED,
            _ => crate::EXIT_FAILURE,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        SortError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create an invalid separator error
    pub fn invalid_separator(sep: &str) -> Self {
        SortError::InvalidSeparator {
            sep: sep.to_string(),
        }
    }

    /// Create a decode error
    pub fn decode(message: &str) -> Self {
        SortError::Decode {
            message: message.to_string(),
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

//! Core error types for lifecoach-core.
//!
//! This module defines the error hierarchy using thiserror for
//! error handling and reporting across the library.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lifecoach-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Parse errors from string input (CLI flags, file fields)
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors raised when parsing user-facing string input.
///
/// Enum fields (`priority`, `effort`, `energy`, `time`) only accept a
/// fixed token set; anything else is rejected here, before it can reach
/// the coaching logic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unknown token for an enum-valued field
    #[error("Invalid value '{value}' for '{field}' (expected one of: {expected})")]
    InvalidToken {
        field: String,
        value: String,
        expected: String,
    },

    /// Empty value where content is required
    #[error("Value for '{field}' must not be empty")]
    Empty { field: String },
}

impl ParseError {
    /// Build an InvalidToken error for an enum-valued field.
    pub fn invalid_token(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        ParseError::InvalidToken {
            field: field.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to save a data file
    #[error("Failed to save {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse a data file
    #[error("Failed to parse {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// No activity matches the given id or prefix
    #[error("No activity found for '{0}'")]
    ActivityNotFound(String),

    /// More than one activity matches the given prefix
    #[error("Activity id prefix '{prefix}' is ambiguous ({matches} matches)")]
    AmbiguousActivity { prefix: String, matches: usize },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_token_message_lists_expected() {
        let err = ParseError::invalid_token("energy", "extreme", &["low", "medium", "high"]);
        let msg = err.to_string();
        assert!(msg.contains("extreme"));
        assert!(msg.contains("energy"));
        assert!(msg.contains("low, medium, high"));
    }

    #[test]
    fn parse_error_converts_to_core_error() {
        let err: CoreError = ParseError::Empty {
            field: "name".to_string(),
        }
        .into();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn ambiguous_activity_message() {
        let err = StorageError::AmbiguousActivity {
            prefix: "a1".to_string(),
            matches: 3,
        };
        assert!(err.to_string().contains("a1"));
        assert!(err.to_string().contains("3"));
    }
}

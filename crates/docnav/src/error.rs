//! Error types for content loading and path parsing

use thiserror::Error;

/// Main error type for docnav operations
#[derive(Error, Debug)]
pub enum DocnavError {
    /// A path or hash fragment could not be parsed into a triple
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath {
        /// The offending input
        path: String,
        /// Why it was rejected
        reason: String,
    },

    /// A registration record violates the record invariant
    #[error("Invalid record '{key}': {reason}")]
    InvalidRecord {
        /// Registry key or title of the record
        key: String,
        /// Why it was rejected
        reason: String,
    },

    /// Name table too large to compile into a matcher
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Malformed JSON content
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure reading content from disk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocnavError {
    /// Build an `InvalidPath` error.
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Build an `InvalidRecord` error.
    pub fn invalid_record(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for docnav operations
pub type Result<T> = std::result::Result<T, DocnavError>;

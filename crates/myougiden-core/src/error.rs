//! Error types for the myougiden search engine.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the myougiden library.
#[derive(Debug, Error)]
pub enum MyougidenError {
    #[error("Unknown search field: {0} (expected kanji, reading or sense)")]
    UnknownField(String),

    // Database errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },

    #[error("Dictionary database not found: {0}")]
    DatabaseNotFound(PathBuf),

    // Pattern errors
    #[error("Invalid regular expression {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for myougiden operations.
pub type Result<T> = std::result::Result<T, MyougidenError>;

impl From<rusqlite::Error> for MyougidenError {
    fn from(err: rusqlite::Error) -> Self {
        MyougidenError::Database {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl MyougidenError {
    /// Whether this error was caused by the user's input rather than the store.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            MyougidenError::UnknownField(_)
                | MyougidenError::InvalidPattern { .. }
                | MyougidenError::DatabaseNotFound(_)
        )
    }
}

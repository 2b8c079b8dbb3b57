//! Error types for cache statement storage
//!
//! A missing statement is reported through [`StoreError::NotFound`] so callers
//! can match on it and turn it into a user message instead of a failure.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The section, or the key inside it, does not exist
    #[error("No '{key}' found in '{section}'.")]
    NotFound { section: String, key: String },

    /// Section or key name rejected before writing
    #[error("Invalid {kind} name: {reason}")]
    InvalidName { kind: &'static str, reason: String },

    /// The cache file exists but is not a table of string tables
    #[error("Cache file {} is corrupt: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Whether this error is a statement miss rather than a real failure
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, StoreError>;

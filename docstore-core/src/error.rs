//! Error types and result types for document store operations.
//!
//! Use [`DocumentStoreResult<T>`] as the return type for fallible operations.
//! A missing document is never an error: lookups return `Ok(None)` and searches
//! return an empty list when nothing matches.

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a document store.
#[derive(Error, Debug)]
pub enum DocumentStoreError {
    /// A required input was absent or malformed at the store boundary
    /// (e.g. a `null` document payload or a document without an author).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Serialization error when converting a document to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The underlying storage backend failed (e.g. its identifier space is exhausted).
    #[error("Backend error: {0}")]
    Backend(String),
}

impl DocumentStoreError {
    /// Shorthand for building an [`DocumentStoreError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        DocumentStoreError::InvalidArgument(message.into())
    }

    /// Returns `true` if this error reports a caller contract violation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DocumentStoreError::InvalidArgument(_))
    }
}

/// A specialized `Result` type for document store operations.
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

impl From<SerdeJsonError> for DocumentStoreError {
    fn from(err: SerdeJsonError) -> Self {
        DocumentStoreError::Serialization(err.to_string())
    }
}

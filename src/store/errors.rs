//! # Store Errors
//!
//! Error types for book store operations.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Book store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Create with an identifier that already exists
    #[error("book with id {0} already exists")]
    DuplicateId(String),

    /// Update or delete on an identifier with no matching record
    #[error("book with id {0} not found")]
    NotFound(String),

    /// The store lock was poisoned by a panicking writer
    #[error("store lock poisoned")]
    LockPoisoned,
}

//! # Store Errors
//!
//! Error types for Resource Store operations.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Resource Store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Identifier does not match the store's id encoding
    #[error("Invalid item id: {0}")]
    InvalidId(String),

    /// Backend (driver or connectivity) failure
    #[error("Store error: {0}")]
    Backend(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

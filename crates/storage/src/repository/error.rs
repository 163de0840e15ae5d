//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repositories and the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("save repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("unsupported save format version {found} (expected {expected})")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("no save with id {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

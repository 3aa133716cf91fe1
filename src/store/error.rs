//! Store Error Types

use thiserror::Error;

/// Failures surfaced by an account store adapter.
///
/// These are opaque to the service layer: it never retries them, it only
/// propagates them to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying medium failed while reading
    #[error("Store read failed: {0}")]
    Read(String),

    /// The underlying medium failed while writing
    #[error("Store write failed: {0}")]
    Write(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

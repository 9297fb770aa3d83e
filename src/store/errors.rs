//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from reading or writing the backing file
#[derive(Debug, Error)]
pub enum StoreError {
    /// Disk I/O failure
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file does not hold a valid JSON document
    #[error("store parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

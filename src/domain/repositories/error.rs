//! Errors shared by storage-backed repositories.

/// Errors that can occur while talking to the backing store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store operation error: {0}")]
    Operation(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

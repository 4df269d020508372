//! Store error types.

use thiserror::Error;

/// Errors that can occur when touching persisted state.
///
/// Callers of the cart store never see these for reads: a snapshot that
/// cannot be read or parsed loads as an empty cart instead. Write
/// failures surface here so the store can log and swallow them.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to write a key.
    #[error("Failed to write key {key}: {reason}")]
    Write { key: String, reason: String },

    /// Failed to remove a key.
    #[error("Failed to remove key {key}: {reason}")]
    Remove { key: String, reason: String },

    /// Failed to serialize a snapshot.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

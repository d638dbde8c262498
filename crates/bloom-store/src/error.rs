//! Store error types.

use thiserror::Error;

/// Errors that can occur when persisting or rehydrating a cart.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The storage backend could not be read or written.
    #[error("Cart storage unavailable: {0}")]
    Storage(String),

    /// Persisted data failed to parse into cart records.
    #[error("Malformed persisted cart: {0}")]
    Malformed(#[from] serde_json::Error),
}

//! Cache store error types.

use thiserror::Error;

/// Errors from a [`CacheStore`](super::CacheStore) operation.
///
/// None of these are surfaced to callers of the dispatcher: a failing cache
/// degrades the service to compute-always, it does not make requests fail.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The store could not be reached (connection refused, DNS, outage).
    #[error("cache connection failed: {0}")]
    Connection(String),

    /// A command against a reachable store failed.
    #[error("cache command failed: {0}")]
    Command(String),

    /// A stored value could not be decoded as a cached answer.
    #[error("cache entry could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

//! Ledger error types.

use thiserror::Error;

/// Errors from a [`Ledger`](super::Ledger) operation.
///
/// Ledger failures are persistence problems: the dispatcher logs them and
/// keeps serving, it never discards a computed answer because of one.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The underlying database rejected the operation.
    #[error("ledger database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The blocking database task was cancelled or panicked.
    #[error("ledger task failed to complete: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// The store is not reachable at all.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

//! Dispatcher error types.

use thiserror::Error;

use crate::backend::BackendError;

/// Failures a caller of [`Dispatcher::process`](super::Dispatcher::process)
/// can observe.
///
/// Cache and ledger problems never appear here: an unreachable cache
/// degrades to compute-always and a failed ledger write is logged, so the
/// only fatal condition is the compute step itself failing on a miss.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The compute backend failed (unreachable, error status, or timeout)
    /// while handling a cache miss. Neither store was mutated.
    #[error("compute failed for question {id}: {source}")]
    Compute {
        id: String,
        #[source]
        source: BackendError,
    },
}

impl DispatchError {
    /// Question id the failure belongs to.
    pub fn question_id(&self) -> &str {
        match self {
            DispatchError::Compute { id, .. } => id,
        }
    }
}

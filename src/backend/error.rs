//! Compute backend error types.

use thiserror::Error;

/// Errors from a [`ComputeBackend`](super::ComputeBackend) call.
///
/// The adapter never retries; a timeout or transport failure surfaces here
/// and the dispatcher maps it to a compute failure for the caller.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure: connection error, timeout, or an
    /// unparseable response body.
    #[error("compute backend request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("compute backend returned status {status}: {body}")]
    Status { status: u16, body: String },
}

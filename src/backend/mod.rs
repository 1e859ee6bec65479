//! Adapter over the expensive generative computation.
//!
//! A single bounded-timeout call per request and no internal retries;
//! retry and pacing policy belong to the external client driving the
//! service.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod ollama;

pub use error::BackendError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockBackend;
pub use ollama::OllamaBackend;

use async_trait::async_trait;

/// A generative backend that turns a prompt into an answer.
#[async_trait]
pub trait ComputeBackend: Send + Sync {
    /// Generates an answer for `prompt`. Blocks up to the adapter's fixed
    /// timeout; a started call is never cancelled early.
    async fn generate(&self, prompt: &str) -> Result<String, BackendError>;

    /// Cheap reachability probe, for health reporting only.
    async fn is_reachable(&self) -> bool;

    /// Name of the underlying model, for health reporting.
    fn model(&self) -> &str;
}

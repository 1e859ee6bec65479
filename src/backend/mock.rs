//! Scriptable compute backend for tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::error::BackendError;
use super::ComputeBackend;

/// Backend returning a canned reply (or a canned failure), with an optional
/// artificial latency so tests can hold two requests in flight at once.
#[derive(Clone)]
pub struct MockBackend {
    reply: Option<String>,
    latency: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl MockBackend {
    /// A backend that answers every prompt with `reply`.
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            latency: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A backend that fails every call as if the service were down.
    pub fn failing() -> Self {
        Self {
            reply: None,
            latency: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Adds a fixed delay before every reply.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of generate calls observed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for MockBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockBackend")
            .field("reply", &self.reply)
            .field("calls", &self.calls())
            .finish()
    }
}

#[async_trait]
impl ComputeBackend for MockBackend {
    async fn generate(&self, _prompt: &str) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(BackendError::Status {
                status: 503,
                body: "mock backend offline".to_string(),
            }),
        }
    }

    async fn is_reachable(&self) -> bool {
        self.reply.is_some()
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}

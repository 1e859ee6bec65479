//! Liveness reporting for the service's dependencies.
//!
//! Purely observational: the dispatcher never consults it, and a degraded
//! report changes nothing about request handling.

use serde::Serialize;

use crate::backend::ComputeBackend;
use crate::cache::CacheStore;

pub const STATUS_HEALTHY: &str = "healthy";
pub const STATUS_DEGRADED: &str = "degraded";

/// Snapshot of dependency reachability.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub backend_connected: bool,
    pub cache_connected: bool,
    pub model: String,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == STATUS_HEALTHY
    }
}

/// Probes the cache store and compute backend on demand.
pub struct HealthMonitor<C, B> {
    cache: C,
    backend: B,
}

impl<C, B> HealthMonitor<C, B>
where
    C: CacheStore,
    B: ComputeBackend,
{
    pub fn new(cache: C, backend: B) -> Self {
        Self { cache, backend }
    }

    pub async fn check(&self) -> HealthReport {
        let backend_connected = self.backend.is_reachable().await;
        let cache_connected = self.cache.ping().await;

        let status = if backend_connected && cache_connected {
            STATUS_HEALTHY
        } else {
            STATUS_DEGRADED
        };

        HealthReport {
            status,
            backend_connected,
            cache_connected,
            model: self.backend.model().to_string(),
        }
    }
}

impl<C, B> std::fmt::Debug for HealthMonitor<C, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthMonitor").finish_non_exhaustive()
    }
}

//! Test double for an unreachable cache store.

use std::time::Duration;

use async_trait::async_trait;

use super::error::CacheError;
use super::types::CachedAnswer;
use super::CacheStore;

/// A store whose every operation fails as if the backend were down.
///
/// Exercises the degrade-to-compute-always path of the dispatcher.
#[derive(Debug, Clone, Default)]
pub struct UnreachableStore;

impl UnreachableStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheStore for UnreachableStore {
    async fn get(&self, _key: &str) -> Result<Option<CachedAnswer>, CacheError> {
        Err(CacheError::Connection("connection refused".to_string()))
    }

    async fn put(
        &self,
        _key: &str,
        _entry: &CachedAnswer,
        _ttl: Duration,
    ) -> Result<(), CacheError> {
        Err(CacheError::Connection("connection refused".to_string()))
    }

    async fn ping(&self) -> bool {
        false
    }
}

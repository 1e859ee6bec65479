//! In-process cache store backed by moka.
//!
//! Used for single-process deployments (`PARROT_CACHE_MODE=memory`) and
//! throughout the test suite. TTL is tracked per entry: a stored value
//! carries its deadline and reads past it behave exactly like absence.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::sync::Cache;

use super::error::CacheError;
use super::types::CachedAnswer;
use super::CacheStore;

#[derive(Clone)]
struct StoredEntry {
    entry: CachedAnswer,
    expires_at: Instant,
}

/// Unbounded in-memory store with per-entry expiry.
#[derive(Clone)]
pub struct MemoryStore {
    entries: Cache<String, StoredEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Cache::builder().build(),
        }
    }

    /// Returns the number of live entries (expired ones may still be counted
    /// until their next lookup).
    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.entry_count() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<CachedAnswer>, CacheError> {
        match self.entries.get(key) {
            Some(stored) if Instant::now() < stored.expires_at => Ok(Some(stored.entry)),
            Some(_) => {
                self.entries.invalidate(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, entry: &CachedAnswer, ttl: Duration) -> Result<(), CacheError> {
        self.entries.insert(
            key.to_string(),
            StoredEntry {
                entry: entry.clone(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn ping(&self) -> bool {
        true
    }
}

//! Volatile key-value cache for scored answers.
//!
//! Entries live under `question:{id}` keys with a fixed TTL; expiry is the
//! only removal mechanism and absence is an expected state. There is no
//! composite get-then-set: callers compose lookup and write themselves.

pub mod error;
pub mod memory;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod redis;
pub mod types;

#[cfg(test)]
mod memory_tests;

pub use error::CacheError;
pub use memory::MemoryStore;
#[cfg(any(test, feature = "mock"))]
pub use mock::UnreachableStore;
pub use self::redis::RedisStore;
pub use types::{AnswerSource, CachedAnswer, answer_key};

use std::time::Duration;

use async_trait::async_trait;

/// Key-value store with TTL-bound entries.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Looks up an entry. `Ok(None)` covers both never-written and expired.
    async fn get(&self, key: &str) -> Result<Option<CachedAnswer>, CacheError>;

    /// Writes an entry that expires after `ttl`. Overwrites any live entry.
    async fn put(&self, key: &str, entry: &CachedAnswer, ttl: Duration) -> Result<(), CacheError>;

    /// Returns `true` if the store currently answers commands.
    async fn ping(&self) -> bool;
}

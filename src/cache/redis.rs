//! Redis-backed cache store.
//!
//! Values are stored as JSON strings under the `question:{id}` key with a
//! Redis-managed TTL. Connections are obtained per operation; a store that
//! cannot be reached surfaces [`CacheError::Connection`] and the dispatcher
//! degrades to compute-always.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;

use super::error::CacheError;
use super::types::CachedAnswer;
use super::CacheStore;

/// Cache store speaking to a standalone Redis node.
#[derive(Clone)]
pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    /// Creates a store from a Redis URL. Does not connect eagerly; the first
    /// operation establishes the connection.
    pub fn from_url(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)
            .map_err(|e| CacheError::Connection(format!("invalid Redis URL: {e}")))?;
        Ok(Self { client })
    }

    async fn connection(&self) -> Result<MultiplexedConnection, CacheError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::Connection(e.to_string()))
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<CachedAnswer>, CacheError> {
        let mut con = self.connection().await?;

        let raw: Option<String> = con
            .get(key)
            .await
            .map_err(|e| CacheError::Command(format!("Redis GET error: {e}")))?;

        match raw {
            Some(json_str) => {
                let entry: CachedAnswer = serde_json::from_str(&json_str)?;
                Ok(Some(entry))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, entry: &CachedAnswer, ttl: Duration) -> Result<(), CacheError> {
        let mut con = self.connection().await?;

        let json_str = serde_json::to_string(entry)?;

        con.set::<_, _, ()>(key, &json_str)
            .await
            .map_err(|e| CacheError::Command(format!("Redis SET error: {e}")))?;

        con.expire::<_, ()>(key, ttl.as_secs() as i64)
            .await
            .map_err(|e| CacheError::Command(format!("Redis EXPIRE error: {e}")))?;

        Ok(())
    }

    async fn ping(&self) -> bool {
        let Ok(mut con) = self.connection().await else {
            return false;
        };
        let pong: Result<String, redis::RedisError> =
            redis::cmd("PING").query_async(&mut con).await;
        pong.is_ok()
    }
}

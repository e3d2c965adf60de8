//! Redis-backed resolution cache.

use async_trait::async_trait;
use redis::{AsyncCommands, aio::ConnectionManager};
use tracing::debug;

use crate::domain::repositories::{ResolutionCache, StoreResult};

/// Stores every decision as one field of a single Redis hash.
///
/// `HSET` upserts one field atomically, so concurrent writers of distinct
/// URLs never overwrite each other. `clear` runs `HLEN` and `DEL` inside one
/// `MULTI`/`EXEC` block to report an exact previous size.
pub struct RedisResolutionCache {
    client: ConnectionManager,
    key: String,
}

impl RedisResolutionCache {
    /// Wraps an established connection; entries live under `{key_prefix}:resolutions`.
    pub fn new(client: ConnectionManager, key_prefix: &str) -> Self {
        Self {
            client,
            key: format!("{}:resolutions", key_prefix),
        }
    }
}

#[async_trait]
impl ResolutionCache for RedisResolutionCache {
    async fn get(&self, source_url: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();
        let value = conn
            .hget::<_, _, Option<String>>(&self.key, source_url)
            .await?;
        Ok(value)
    }

    async fn put(&self, source_url: &str, resolved_url: &str) -> StoreResult<()> {
        let mut conn = self.client.clone();
        conn.hset::<_, _, _, ()>(&self.key, source_url, resolved_url)
            .await?;
        debug!("Redis HSET {} -> {}", source_url, resolved_url);
        Ok(())
    }

    async fn clear(&self) -> StoreResult<usize> {
        let mut conn = self.client.clone();
        let (previous, _deleted): (usize, usize) = redis::pipe()
            .atomic()
            .hlen(&self.key)
            .del(&self.key)
            .query_async(&mut conn)
            .await?;
        Ok(previous)
    }

    async fn len(&self) -> StoreResult<usize> {
        let mut conn = self.client.clone();
        Ok(conn.hlen::<_, usize>(&self.key).await?)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

//! Process-local resolution cache.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::repositories::{ResolutionCache, StoreResult};

/// A [`ResolutionCache`] kept in process memory.
///
/// Used when neither Postgres nor Redis is configured, and as the fake store
/// in tests. Entries do not survive a restart.
#[derive(Default)]
pub struct InMemoryResolutionCache {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryResolutionCache {
    pub fn new() -> Self {
        debug!("Using in-memory resolution cache");
        Self::default()
    }
}

#[async_trait]
impl ResolutionCache for InMemoryResolutionCache {
    async fn get(&self, source_url: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().await.get(source_url).cloned())
    }

    async fn put(&self, source_url: &str, resolved_url: &str) -> StoreResult<()> {
        self.entries
            .write()
            .await
            .insert(source_url.to_string(), resolved_url.to_string());
        Ok(())
    }

    async fn clear(&self) -> StoreResult<usize> {
        let mut entries = self.entries.write().await;
        let previous = entries.len();
        entries.clear();
        Ok(previous)
    }

    async fn len(&self) -> StoreResult<usize> {
        Ok(self.entries.read().await.len())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_put_then_get() {
        let cache = InMemoryResolutionCache::new();
        cache.put("https://a/1.png", "https://b/1.png").await.unwrap();

        assert_eq!(
            cache.get("https://a/1.png").await.unwrap().as_deref(),
            Some("https://b/1.png")
        );
        assert_eq!(cache.get("https://a/2.png").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites_same_key() {
        let cache = InMemoryResolutionCache::new();
        cache.put("k", "v1").await.unwrap();
        cache.put("k", "v2").await.unwrap();

        assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("v2"));
        assert_eq!(cache.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_clear_reports_previous_size() {
        let cache = InMemoryResolutionCache::new();
        cache.put("a", "a").await.unwrap();
        cache.put("b", "b").await.unwrap();

        assert_eq!(cache.clear().await.unwrap(), 2);
        assert_eq!(cache.len().await.unwrap(), 0);
        assert_eq!(cache.clear().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_puts_on_distinct_keys_are_all_kept() {
        let cache = Arc::new(InMemoryResolutionCache::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let cache = cache.clone();
                tokio::spawn(async move {
                    let key = format!("https://staging.example.com/{i}.png");
                    cache.put(&key, &key).await.unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(cache.len().await.unwrap(), 64);
    }
}

//! Repository trait for the source URL → resolved URL mapping.

use super::StoreResult;
use async_trait::async_trait;

/// Durable cache of resolution decisions.
///
/// A single flat mapping keyed by the exact source URL string. There is no
/// TTL and no eviction: an entry stays until [`ResolutionCache::clear`] drops
/// every entry at once.
///
/// Implementations must be per-key addressable: `put` is an atomic upsert of
/// one key and never rewrites the rest of the mapping, so concurrent puts of
/// distinct keys cannot lose each other.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::PgResolutionCache`] - PostgreSQL table
/// - [`crate::infrastructure::cache::RedisResolutionCache`] - Redis hash
/// - [`crate::infrastructure::cache::InMemoryResolutionCache`] - Process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResolutionCache: Send + Sync {
    /// Looks up the resolved URL stored for `source_url`.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreError`] when the store cannot be read. Callers
    /// treat this as a miss.
    async fn get(&self, source_url: &str) -> StoreResult<Option<String>>;

    /// Stores (or overwrites) the decision for `source_url`.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreError`] when the write was rejected; the value
    /// must then not be considered cached.
    async fn put(&self, source_url: &str, resolved_url: &str) -> StoreResult<()>;

    /// Removes every entry and returns how many were present.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreError`] when the store rejected the operation.
    async fn clear(&self) -> StoreResult<usize>;

    /// Number of cached decisions.
    async fn len(&self) -> StoreResult<usize>;

    /// Checks if the backing store is reachable.
    async fn health_check(&self) -> bool;
}

//! Resolution cache backends.
//!
//! Provides three [`ResolutionCache`](crate::domain::repositories::ResolutionCache)
//! implementations:
//! - [`PgResolutionCache`] - Durable PostgreSQL table
//! - [`RedisResolutionCache`] - Redis hash
//! - [`InMemoryResolutionCache`] - Process-local fallback and test fake

mod memory_cache;
mod pg_cache;
mod redis_cache;

pub use memory_cache::InMemoryResolutionCache;
pub use pg_cache::PgResolutionCache;
pub use redis_cache::RedisResolutionCache;

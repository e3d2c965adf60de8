//! PostgreSQL-backed resolution cache.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{ResolutionCache, StoreResult};

/// Stores decisions as rows of `resolution_cache`, keyed by `source_url`.
///
/// Writes use `INSERT … ON CONFLICT DO UPDATE`, an atomic per-key upsert.
pub struct PgResolutionCache {
    pool: Arc<PgPool>,
}

impl PgResolutionCache {
    /// Creates a new cache with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResolutionCache for PgResolutionCache {
    async fn get(&self, source_url: &str) -> StoreResult<Option<String>> {
        let resolved = sqlx::query_scalar::<_, String>(
            "SELECT resolved_url FROM resolution_cache WHERE source_url = $1",
        )
        .bind(source_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(resolved)
    }

    async fn put(&self, source_url: &str, resolved_url: &str) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO resolution_cache (source_url, resolved_url)
            VALUES ($1, $2)
            ON CONFLICT (source_url)
            DO UPDATE SET resolved_url = EXCLUDED.resolved_url, resolved_at = NOW()
            "#,
        )
        .bind(source_url)
        .bind(resolved_url)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn clear(&self) -> StoreResult<usize> {
        let result = sqlx::query("DELETE FROM resolution_cache")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() as usize)
    }

    async fn len(&self) -> StoreResult<usize> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM resolution_cache")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count as usize)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}

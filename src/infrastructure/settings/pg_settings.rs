//! PostgreSQL-backed settings storage.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{SettingsRepository, StoreResult};

/// Stores settings as rows of `app_settings`.
pub struct PgSettingsRepository {
    pool: Arc<PgPool>,
}

impl PgSettingsRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    async fn get_setting(&self, key: &str) -> StoreResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM app_settings WHERE key = $1")
            .bind(key)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(value)
    }

    async fn put_setting(&self, key: &str, value: &str) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO app_settings (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key)
            DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}

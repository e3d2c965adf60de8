//! Redis-backed settings storage.

use async_trait::async_trait;
use redis::{AsyncCommands, aio::ConnectionManager};

use crate::domain::repositories::{SettingsRepository, StoreResult};

/// Stores each setting as a plain Redis string under `{key_prefix}:setting:{key}`.
pub struct RedisSettingsRepository {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisSettingsRepository {
    pub fn new(client: ConnectionManager, key_prefix: &str) -> Self {
        Self {
            client,
            key_prefix: format!("{}:setting:", key_prefix),
        }
    }

    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl SettingsRepository for RedisSettingsRepository {
    async fn get_setting(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();
        Ok(conn
            .get::<_, Option<String>>(self.build_key(key))
            .await?)
    }

    async fn put_setting(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.client.clone();
        conn.set::<_, _, ()>(self.build_key(key), value).await?;
        Ok(())
    }
}

//! Process-local settings storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repositories::{SettingsRepository, StoreResult};

/// A [`SettingsRepository`] kept in process memory.
#[derive(Default)]
pub struct InMemorySettingsRepository {
    values: RwLock<HashMap<String, String>>,
}

impl InMemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn get_setting(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn put_setting(&self, key: &str, value: &str) -> StoreResult<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_overwrite() {
        let repo = InMemorySettingsRepository::new();
        assert_eq!(repo.get_setting("production_url").await.unwrap(), None);

        repo.put_setting("production_url", "https://www.example.com")
            .await
            .unwrap();
        assert_eq!(
            repo.get_setting("production_url").await.unwrap().as_deref(),
            Some("https://www.example.com")
        );

        repo.put_setting("production_url", "").await.unwrap();
        assert_eq!(
            repo.get_setting("production_url").await.unwrap().as_deref(),
            Some("")
        );
    }
}

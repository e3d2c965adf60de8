//! Repository trait for scalar, operator-controlled settings.

use super::StoreResult;
use async_trait::async_trait;

/// Storage key of the production base URL setting.
pub const PRODUCTION_URL_KEY: &str = "production_url";

/// Generic string key/value storage for settings.
///
/// # Implementations
///
/// - [`crate::infrastructure::settings::PgSettingsRepository`] - PostgreSQL table
/// - [`crate::infrastructure::settings::RedisSettingsRepository`] - Redis string keys
/// - [`crate::infrastructure::settings::InMemorySettingsRepository`] - Process-local map
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get_setting(&self, key: &str) -> StoreResult<Option<String>>;

    /// Creates or replaces a setting.
    async fn put_setting(&self, key: &str, value: &str) -> StoreResult<()>;
}

//! Backend selection and connection setup for the persistent store.

use std::sync::Arc;
use std::time::Duration;

use redis::{AsyncCommands, Client, aio::ConnectionManager};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, warn};

use crate::config::{StoreBackend, StoreConfig};
use crate::domain::repositories::{ResolutionCache, SettingsRepository, StoreError};
use crate::infrastructure::cache::{
    InMemoryResolutionCache, PgResolutionCache, RedisResolutionCache,
};
use crate::infrastructure::settings::{
    InMemorySettingsRepository, PgSettingsRepository, RedisSettingsRepository,
};

const CONNECT_ATTEMPTS: usize = 5;

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::Connection(e.to_string())
            }
            other => Self::Operation(other.to_string()),
        }
    }
}

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        if e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout() {
            Self::Connection(e.to_string())
        } else {
            Self::Operation(e.to_string())
        }
    }
}

/// The repositories backed by one configured store.
#[derive(Clone)]
pub struct Store {
    pub backend: StoreBackend,
    pub cache: Arc<dyn ResolutionCache>,
    pub settings: Arc<dyn SettingsRepository>,
}

impl Store {
    /// A non-persistent store, used when no backend is configured and in tests.
    pub fn in_memory() -> Self {
        Self {
            backend: StoreBackend::Memory,
            cache: Arc::new(InMemoryResolutionCache::new()),
            settings: Arc::new(InMemorySettingsRepository::new()),
        }
    }
}

/// Connects to the configured backend once.
///
/// # Errors
///
/// Returns [`StoreError::Connection`] if the backend is unreachable and
/// [`StoreError::Operation`] if migrations fail.
pub async fn connect(config: &StoreConfig) -> Result<Store, StoreError> {
    match config.backend() {
        StoreBackend::Postgres => {
            let pool = Arc::new(connect_postgres(config).await?);
            info!("Store enabled (PostgreSQL)");
            Ok(Store {
                backend: StoreBackend::Postgres,
                cache: Arc::new(PgResolutionCache::new(pool.clone())),
                settings: Arc::new(PgSettingsRepository::new(pool)),
            })
        }
        StoreBackend::Redis => {
            let redis_url = config.redis_url.as_deref().unwrap_or_default();
            let manager = connect_redis(redis_url).await?;
            info!("Store enabled (Redis)");
            Ok(Store {
                backend: StoreBackend::Redis,
                cache: Arc::new(RedisResolutionCache::new(
                    manager.clone(),
                    &config.key_prefix,
                )),
                settings: Arc::new(RedisSettingsRepository::new(manager, &config.key_prefix)),
            })
        }
        StoreBackend::Memory => {
            warn!("No DATABASE_URL or REDIS_URL configured; resolutions will not survive a restart");
            Ok(Store::in_memory())
        }
    }
}

/// Connects with exponential backoff, for startup against a store that may
/// still be coming up.
pub async fn connect_with_retry(config: &StoreConfig) -> Result<Store, StoreError> {
    let strategy = ExponentialBackoff::from_millis(10)
        .factor(20)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(CONNECT_ATTEMPTS - 1);

    Retry::spawn(strategy, move || async move {
        connect(config)
            .await
            .inspect_err(|e| warn!("Store connection attempt failed: {}", e))
    })
    .await
}

/// Opens the Postgres pool and applies pending migrations.
async fn connect_postgres(config: &StoreConfig) -> Result<PgPool, StoreError> {
    let database_url = config.database_url.as_deref().unwrap_or_default();

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(database_url)
        .await
        .map_err(|e| StoreError::Connection(format!("Failed to connect to database: {}", e)))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| StoreError::Operation(format!("Failed to migrate: {}", e)))?;

    Ok(pool)
}

/// Connects to Redis and validates the connection with a PING.
async fn connect_redis(redis_url: &str) -> Result<ConnectionManager, StoreError> {
    let client = Client::open(redis_url)
        .map_err(|e| StoreError::Connection(format!("Failed to create Redis client: {}", e)))?;

    let manager = ConnectionManager::new(client)
        .await
        .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

    let mut test_conn = manager.clone();
    test_conn
        .ping::<()>()
        .await
        .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

    Ok(manager)
}

//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::application::services::{
    AuthService, CacheService, ConfigurationGate, SettingsService,
};
use crate::config::StoreBackend;
use crate::domain::entities::SiteConfiguration;
use crate::domain::prober::ExistenceProber;
use crate::error::AppError;
use crate::infrastructure::store::Store;

/// Time budget for one resolve batch unless configured otherwise.
pub const DEFAULT_RESOLVE_DEADLINE: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<ConfigurationGate>,
    pub cache_service: Arc<CacheService>,
    pub settings_service: Arc<SettingsService>,
    pub auth_service: Arc<AuthService>,
    pub backend: StoreBackend,
    /// Unfinished URLs of a resolve batch pass through once this elapses.
    pub resolve_deadline: Duration,
    settings_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// Wires the services over `store`.
    ///
    /// `configuration` is the one loaded at startup; the gate keeps it until
    /// the next settings save.
    pub fn new(
        store: Store,
        prober: Arc<dyn ExistenceProber>,
        configuration: SiteConfiguration,
        admin_token: &str,
    ) -> Self {
        let local_base_url = configuration.local_base_url.clone();

        Self {
            gate: Arc::new(ConfigurationGate::new(
                store.cache.clone(),
                prober,
                configuration,
            )),
            cache_service: Arc::new(CacheService::new(store.cache)),
            settings_service: Arc::new(SettingsService::new(store.settings, local_base_url)),
            auth_service: Arc::new(AuthService::new(admin_token)),
            backend: store.backend,
            resolve_deadline: DEFAULT_RESOLVE_DEADLINE,
            settings_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn with_resolve_deadline(mut self, deadline: Duration) -> Self {
        self.resolve_deadline = deadline;
        self
    }

    /// Persists the production URL and reconfigures the gate with it.
    ///
    /// Saves are serialized so the gate always runs with the last stored
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed URL or a store error if
    /// the write fails; the gate is left unchanged in both cases.
    pub async fn save_production_url(
        &self,
        raw: Option<&str>,
    ) -> Result<SiteConfiguration, AppError> {
        let _guard = self.settings_lock.lock().await;

        let configuration = self.settings_service.save_production_url(raw).await?;
        self.gate.reconfigure(configuration.clone());

        Ok(configuration)
    }
}

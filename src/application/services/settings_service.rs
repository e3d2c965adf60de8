//! Production URL setting management.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::domain::entities::SiteConfiguration;
use crate::domain::repositories::{PRODUCTION_URL_KEY, SettingsRepository};
use crate::error::AppError;
use crate::utils::base_url::normalize_base_url;

/// Reads and writes the operator-controlled production base URL.
///
/// The local base URL is fixed for the lifetime of the process; only the
/// production side is persisted.
pub struct SettingsService {
    repository: Arc<dyn SettingsRepository>,
    local_base_url: String,
}

impl SettingsService {
    /// Creates a new settings service.
    ///
    /// `local_base_url` must already be normalized.
    pub fn new(repository: Arc<dyn SettingsRepository>, local_base_url: String) -> Self {
        Self {
            repository,
            local_base_url,
        }
    }

    pub fn local_base_url(&self) -> &str {
        &self.local_base_url
    }

    /// Loads the current configuration from the store.
    ///
    /// A stored value that is no longer a valid base URL is ignored with a
    /// warning, which leaves resolution inactive.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub async fn load(&self) -> Result<SiteConfiguration, AppError> {
        let stored = self.repository.get_setting(PRODUCTION_URL_KEY).await?;

        let production = match stored {
            Some(raw) if !raw.trim().is_empty() => match normalize_base_url(&raw) {
                Ok(url) => Some(url),
                Err(e) => {
                    warn!("Ignoring stored production URL '{}': {}", raw, e);
                    None
                }
            },
            _ => None,
        };

        Ok(SiteConfiguration::new(self.local_base_url.clone(), production))
    }

    /// Saves (or, with `None` / blank input, clears) the production base URL.
    ///
    /// A cleared URL is stored as an empty value so that a later
    /// [`Self::seed_production_url`] does not bring it back.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not a valid HTTP(S)
    /// base URL, or a store error if the write fails.
    pub async fn save_production_url(
        &self,
        raw: Option<&str>,
    ) -> Result<SiteConfiguration, AppError> {
        let production = match raw.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => {
                let normalized = normalize_base_url(value).map_err(|e| {
                    AppError::bad_request(
                        "Invalid production URL",
                        json!({ "production_url": value, "reason": e.to_string() }),
                    )
                })?;
                self.repository
                    .put_setting(PRODUCTION_URL_KEY, &normalized)
                    .await?;
                info!("Production URL set to {}", normalized);
                Some(normalized)
            }
            None => {
                self.repository.put_setting(PRODUCTION_URL_KEY, "").await?;
                info!("Production URL cleared");
                None
            }
        };

        Ok(SiteConfiguration::new(self.local_base_url.clone(), production))
    }

    /// Stores `production_url` only if no value, not even a cleared one, is
    /// stored yet.
    ///
    /// Returns `true` if the seed was written.
    pub async fn seed_production_url(&self, production_url: &str) -> Result<bool, AppError> {
        if self
            .repository
            .get_setting(PRODUCTION_URL_KEY)
            .await?
            .is_some()
        {
            return Ok(false);
        }

        self.save_production_url(Some(production_url)).await?;
        Ok(true)
    }
}

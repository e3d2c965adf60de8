//! DTOs for the settings endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::SiteConfiguration;

/// Body of `PUT /api/settings`.
///
/// `null`, a missing field or a blank string clears the production URL.
/// Non-blank values are sanitised by the settings service, which reports
/// malformed URLs as validation errors.
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    #[serde(default)]
    pub production_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub production_url: Option<String>,
    pub local_url: String,
    pub active: bool,
}

impl From<SiteConfiguration> for SettingsResponse {
    fn from(configuration: SiteConfiguration) -> Self {
        Self {
            active: configuration.is_active(),
            production_url: configuration.production_base_url,
            local_url: configuration.local_base_url,
        }
    }
}

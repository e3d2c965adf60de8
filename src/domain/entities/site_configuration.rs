//! Domain entity describing where assets live.

/// The local and production base URLs for this site.
///
/// Both values are expected in the canonical form produced by
/// [`crate::utils::base_url::normalize_base_url`] (no trailing slash), which
/// makes the equality check in [`SiteConfiguration::is_active`] meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfiguration {
    /// Base URL of the host this service runs next to (staging / dev).
    pub local_base_url: String,
    /// Base URL of the authoritative production host, if configured.
    pub production_base_url: Option<String>,
}

impl SiteConfiguration {
    /// Creates a new configuration snapshot.
    pub fn new(local_base_url: String, production_base_url: Option<String>) -> Self {
        Self {
            local_base_url,
            production_base_url,
        }
    }

    /// Whether resolution should run at all.
    ///
    /// Active iff a production base URL is set, non-empty, and different from
    /// the local base URL.
    pub fn is_active(&self) -> bool {
        self.active_production_base().is_some()
    }

    /// Returns the production base URL only when the configuration is active.
    pub fn active_production_base(&self) -> Option<&str> {
        self.production_base_url
            .as_deref()
            .filter(|production| !production.is_empty() && *production != self.local_base_url)
    }
}

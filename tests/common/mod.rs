#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use asset_fallback::domain::entities::SiteConfiguration;
use asset_fallback::domain::prober::ExistenceProber;
use asset_fallback::infrastructure::probe::{HttpProber, ProbeMethod};
use asset_fallback::infrastructure::store::Store;
use asset_fallback::state::AppState;

pub const ADMIN_TOKEN: &str = "test-admin-token";
pub const LOCAL: &str = "https://staging.example.com";
pub const PRODUCTION: &str = "https://www.example.com";

pub fn bearer() -> String {
    format!("Bearer {}", ADMIN_TOKEN)
}

pub fn test_prober() -> Arc<dyn ExistenceProber> {
    Arc::new(
        HttpProber::new(
            Duration::from_secs(2),
            Duration::from_millis(500),
            ProbeMethod::Head,
        )
        .unwrap(),
    )
}

/// State over a fresh in-memory store.
pub fn create_test_state(local: &str, production: Option<&str>) -> (AppState, Store) {
    create_test_state_with_prober(local, production, test_prober())
}

pub fn create_test_state_with_prober(
    local: &str,
    production: Option<&str>,
    prober: Arc<dyn ExistenceProber>,
) -> (AppState, Store) {
    let store = Store::in_memory();
    let configuration =
        SiteConfiguration::new(local.to_string(), production.map(str::to_string));

    let state = AppState::new(store.clone(), prober, configuration, ADMIN_TOKEN);

    (state, store)
}

//! API route configuration.
//!
//! Every endpoint requires Bearer token authentication via
//! [`crate::api::middleware::auth`]. Resolution is split out only to get
//! the looser rate limit meant for page rendering.

use crate::api::handlers::{
    cache_stats_handler, clear_cache_handler, get_settings_handler, resolve_handler,
    update_settings_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Admin routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET  /settings`     - Current production URL and gate state
/// - `PUT  /settings`     - Save or remove the production URL
/// - `POST /cache/clear`  - Empty the resolution cache
/// - `GET  /cache/stats`  - Number of cached resolutions
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/settings",
            get(get_settings_handler).put(update_settings_handler),
        )
        .route("/cache/clear", post(clear_cache_handler))
        .route("/cache/stats", get(cache_stats_handler))
}

/// Resolution routes for the rendering pipeline, protected by Bearer token
/// authentication.
///
/// # Endpoints
///
/// - `POST /resolve` - Resolve a batch of candidate asset URLs
pub fn resolve_routes() -> Router<AppState> {
    Router::new().route("/resolve", post(resolve_handler))
}

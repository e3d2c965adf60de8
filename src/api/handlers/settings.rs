//! Handlers for the production URL setting.

use axum::{Json, extract::State};

use crate::api::dto::settings::{SettingsResponse, UpdateSettingsRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the configuration the gate is currently running with.
///
/// # Endpoint
///
/// `GET /api/settings`
///
/// # Response
///
/// ```json
/// {
///   "production_url": "https://www.example.com",
///   "local_url": "https://staging.example.com",
///   "active": true
/// }
/// ```
pub async fn get_settings_handler(State(state): State<AppState>) -> Json<SettingsResponse> {
    Json(SettingsResponse::from(state.gate.configuration()))
}

/// Saves the production URL and reconfigures the gate.
///
/// # Endpoint
///
/// `PUT /api/settings`
///
/// # Request Body
///
/// ```json
/// { "production_url": "https://www.example.com/" }
/// ```
///
/// `null` or an empty string clears the setting and deactivates fallback.
/// Cached resolutions are left in place; clear the cache to re-probe them
/// against the new production URL.
///
/// # Errors
///
/// - 400 Bad Request if the URL is not a valid HTTP(S) base URL
/// - 503 Service Unavailable if the store cannot be reached
pub async fn update_settings_handler(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    let configuration = state
        .save_production_url(payload.production_url.as_deref())
        .await?;

    Ok(Json(SettingsResponse::from(configuration)))
}

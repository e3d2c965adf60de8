//! Handlers for cache administration.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::cache::{CacheStatsResponse, ClearCacheResponse};
use crate::domain::entities::ClearOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Empties the resolution cache.
///
/// # Endpoint
///
/// `POST /api/cache/clear`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "itemsCleared": 12,
///   "message": "Cleared 12 cached image URLs",
///   "errorCode": 0
/// }
/// ```
///
/// # Response Codes
///
/// - **200 OK**: Cleared, or there was nothing to clear (`errorCode` 1)
/// - **500 Internal Server Error**: The store rejected the write (`errorCode` 2)
pub async fn clear_cache_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<ClearCacheResponse>) {
    let outcome = state.cache_service.clear().await;

    let status = match outcome {
        ClearOutcome::WriteFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    };

    (status, Json(ClearCacheResponse::from(&outcome)))
}

/// Reports the number of cached resolutions.
///
/// # Endpoint
///
/// `GET /api/cache/stats`
pub async fn cache_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<CacheStatsResponse>, AppError> {
    let entries = state.cache_service.entry_count().await?;
    Ok(Json(CacheStatsResponse { entries }))
}

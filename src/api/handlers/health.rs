//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable
/// - **503 Service Unavailable**: Store unreachable
///
/// An inactive resolver is reported but does not degrade health: it is the
/// expected state until a production URL is configured.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": {
///       "status": "ok",
///       "message": "postgres connected"
///     },
///     "resolver": {
///       "status": "ok",
///       "message": "active: https://staging.example.com -> https://www.example.com"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let resolver_check = check_resolver(&state);

    let healthy = store_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: store_check,
            resolver: resolver_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_store(state: &AppState) -> CheckStatus {
    let backend = state.backend.as_str();

    if state.cache_service.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} connected", backend)),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("{} connection failed", backend)),
        }
    }
}

fn check_resolver(state: &AppState) -> CheckStatus {
    let configuration = state.gate.configuration();

    let message = match configuration.active_production_base() {
        Some(production) => format!(
            "active: {} -> {}",
            configuration.local_base_url, production
        ),
        None => "inactive: no production URL configured".to_string(),
    };

    CheckStatus {
        status: "ok".to_string(),
        message: Some(message),
    }
}

//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates admin requests using the configured Bearer token.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <ADMIN_TOKEN>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing, malformed or carries
/// a different token. The response includes `WWW-Authenticate: Bearer`.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/api/settings", get(get_settings_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let req = Request::from_parts(parts, body);

    st.auth_service.authenticate(&token)?;

    Ok(next.run(req).await)
}

//! Handler for the batch resolution endpoint.

use axum::{Json, extract::State};
use tokio::time::{Instant, timeout_at};
use tracing::warn;
use validator::Validate;

use crate::api::dto::resolve::{ResolveRequest, ResolveResponse, ResolvedItem};
use crate::domain::entities::Resolution;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves every candidate asset URL of a page.
///
/// # Endpoint
///
/// `POST /api/resolve`
///
/// Requires `Authorization: Bearer <token>`.
///
/// # Request Body
///
/// ```json
/// {
///   "urls": [
///     "https://staging.example.com/img/a.png",
///     "https://cdn.other.net/b.png"
///   ]
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "active": true,
///   "items": [
///     {
///       "source": "https://staging.example.com/img/a.png",
///       "resolved": "https://www.example.com/img/a.png",
///       "outcome": "not_found",
///       "cached": true
///     }
///   ]
/// }
/// ```
///
/// URLs are resolved one after another in request order, so a single page
/// never has more than one probe in flight. Probe and cache failures never
/// fail the request; the affected URL is returned unchanged. The whole batch
/// runs against one configuration snapshot, and URLs still unresolved when
/// [`AppState::resolve_deadline`] elapses pass through uncached.
///
/// # Errors
///
/// - 400 Bad Request if the list is empty or longer than 500 entries
/// - 401 Unauthorized if the token is missing or invalid
pub async fn resolve_handler(
    State(state): State<AppState>,
    Json(payload): Json<ResolveRequest>,
) -> Result<Json<ResolveResponse>, AppError> {
    payload.validate()?;

    let resolver = state.gate.resolver();
    let deadline = Instant::now() + state.resolve_deadline;
    let mut expired = 0usize;
    let mut items = Vec::with_capacity(payload.urls.len());

    for url in payload.urls {
        let resolution = match resolver.as_deref() {
            Some(resolver) => match timeout_at(deadline, resolver.resolve_detailed(&url)).await {
                Ok(resolution) => resolution,
                Err(_) => {
                    expired += 1;
                    Resolution::pass_through(&url)
                }
            },
            None => Resolution::pass_through(&url),
        };
        items.push(ResolvedItem::new(url, resolution));
    }

    if expired > 0 {
        warn!(
            "Resolve deadline of {:?} exceeded, {} URL(s) passed through",
            state.resolve_deadline, expired
        );
    }

    Ok(Json(ResolveResponse {
        active: resolver.is_some(),
        items,
    }))
}

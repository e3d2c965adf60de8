//! DTOs for the batch resolution endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Resolution;

/// Candidate asset URLs to resolve, typically every media URL on one page.
#[derive(Debug, Deserialize, Validate)]
pub struct ResolveRequest {
    #[validate(length(
        min = 1,
        max = 500,
        message = "Between 1 and 500 URLs are accepted per request"
    ))]
    pub urls: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    /// Whether fallback resolution is active for the current configuration.
    pub active: bool,
    pub items: Vec<ResolvedItem>,
}

/// Resolution result for one URL, in request order.
#[derive(Debug, Serialize)]
pub struct ResolvedItem {
    pub source: String,
    pub resolved: String,
    /// `pass_through`, `cache_hit`, `found`, `not_found` or `indeterminate`.
    pub outcome: &'static str,
    pub cached: bool,
}

impl ResolvedItem {
    pub fn new(source: String, resolution: Resolution) -> Self {
        Self {
            source,
            outcome: resolution.source.as_str(),
            cached: resolution.cached,
            resolved: resolution.url,
        }
    }
}

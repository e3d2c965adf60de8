//! DTOs for the cache administration endpoints.

use serde::Serialize;

use crate::domain::entities::ClearOutcome;

/// Notice returned by `POST /api/cache/clear`.
///
/// Field names are camelCase to match the admin UI that consumes them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearCacheResponse {
    pub success: bool,
    pub items_cleared: usize,
    pub message: String,
    /// 0 on success, 1 when there was nothing to clear, 2 when the write failed.
    pub error_code: u8,
}

impl From<&ClearOutcome> for ClearCacheResponse {
    fn from(outcome: &ClearOutcome) -> Self {
        Self {
            success: outcome.success(),
            items_cleared: outcome.items_cleared(),
            message: outcome.message(),
            error_code: outcome.error_code(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CacheStatsResponse {
    pub entries: usize,
}

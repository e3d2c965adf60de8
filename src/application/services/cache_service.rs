//! Administrative operations on the resolution cache.

use std::sync::Arc;

use metrics::counter;
use tracing::{info, warn};

use crate::domain::entities::ClearOutcome;
use crate::domain::repositories::ResolutionCache;
use crate::error::AppError;

const CACHE_CLEARS: &str = "asset_fallback_cache_clears_total";

/// Clears and inspects the resolution cache on behalf of an operator.
pub struct CacheService {
    cache: Arc<dyn ResolutionCache>,
}

impl CacheService {
    pub fn new(cache: Arc<dyn ResolutionCache>) -> Self {
        Self { cache }
    }

    /// Drops every cached decision.
    ///
    /// After a clear, every URL is probed again on its next resolution.
    /// Never fails: a rejected write is reported as
    /// [`ClearOutcome::WriteFailed`].
    pub async fn clear(&self) -> ClearOutcome {
        let outcome = match self.cache.clear().await {
            Ok(0) => ClearOutcome::NothingToClear,
            Ok(items) => ClearOutcome::Cleared { items },
            Err(e) => ClearOutcome::WriteFailed {
                reason: e.to_string(),
            },
        };

        counter!(CACHE_CLEARS, "outcome" => outcome.as_str()).increment(1);
        match &outcome {
            ClearOutcome::WriteFailed { reason } => warn!("Cache clear failed: {}", reason),
            other => info!("Cache clear: {}", other.message()),
        }

        outcome
    }

    /// Number of cached decisions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] when the
    /// store cannot be read.
    pub async fn entry_count(&self) -> Result<usize, AppError> {
        Ok(self.cache.len().await?)
    }

    pub async fn health_check(&self) -> bool {
        self.cache.health_check().await
    }
}

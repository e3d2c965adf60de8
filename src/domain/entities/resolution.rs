//! Result of resolving a single candidate URL.

use super::ProbeResult;

/// How a resolved URL was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Resolution skipped: inactive configuration or not an absolute URL.
    PassThrough,
    /// Served from the resolution cache without probing.
    CacheHit,
    /// Probed on a cache miss.
    Probed(ProbeResult),
}

impl ResolutionSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PassThrough => "pass_through",
            Self::CacheHit => "cache_hit",
            Self::Probed(result) => result.as_str(),
        }
    }
}

/// The URL to serve plus diagnostics about how it was decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub url: String,
    pub source: ResolutionSource,
    /// `true` when the decision is present in the cache after this call.
    pub cached: bool,
}

impl Resolution {
    pub fn pass_through(url: &str) -> Self {
        Self {
            url: url.to_string(),
            source: ResolutionSource::PassThrough,
            cached: false,
        }
    }
}

//! Outcome of a network existence check.

use std::fmt;

/// Tri-state result of probing a URL.
///
/// Only [`ProbeResult::NotFound`] (a confirmed HTTP 404) triggers a fallback.
/// [`ProbeResult::Indeterminate`] covers unreachable hosts, timeouts and
/// malformed responses and is handled exactly like [`ProbeResult::Found`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeResult {
    Found,
    NotFound,
    Indeterminate,
}

impl ProbeResult {
    /// Returns `true` when the URL must be rewritten to the production host.
    pub fn requires_fallback(self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Stable snake_case label used in logs, metrics and API responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::NotFound => "not_found",
            Self::Indeterminate => "indeterminate",
        }
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Existence probe contract.

use crate::domain::entities::ProbeResult;
use async_trait::async_trait;

/// Answers "does this resource exist at this location?".
///
/// Implementations never fail: network and protocol errors are reported as
/// [`ProbeResult::Indeterminate`] so the caller's policy stays explicit.
///
/// # Implementations
///
/// - [`crate::infrastructure::probe::HttpProber`] - HTTP HEAD/GET probe
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExistenceProber: Send + Sync {
    async fn check(&self, url: &str) -> ProbeResult;
}

//! HTTP existence probe.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode, redirect};
use tracing::debug;

use crate::domain::entities::ProbeResult;
use crate::domain::prober::ExistenceProber;

/// HTTP method used for probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    Head,
    Get,
}

impl FromStr for ProbeMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "head" => Ok(Self::Head),
            "get" => Ok(Self::Get),
            other => Err(format!("unsupported probe method '{}'", other)),
        }
    }
}

/// Errors raised while building the probe client.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Probes URLs with a single HTTP request and classifies the status line.
///
/// Redirects are not followed: the first status received decides, so a 3xx
/// response counts as found. Every request is bounded by the configured
/// timeouts; an expired timeout yields [`ProbeResult::Indeterminate`].
pub struct HttpProber {
    http: HttpClient,
    method: ProbeMethod,
}

impl HttpProber {
    /// Creates a prober.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Client`] if the TLS backend cannot be initialised.
    pub fn new(
        timeout: Duration,
        connect_timeout: Duration,
        method: ProbeMethod,
    ) -> Result<Self, ProbeError> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .redirect(redirect::Policy::none())
            .user_agent(concat!("asset-fallback/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProbeError::Client(e.to_string()))?;

        Ok(Self { http, method })
    }
}

/// Maps a received status to a probe result: only 404 means "not found".
pub fn classify_status(status: StatusCode) -> ProbeResult {
    if status == StatusCode::NOT_FOUND {
        ProbeResult::NotFound
    } else {
        ProbeResult::Found
    }
}

#[async_trait]
impl ExistenceProber for HttpProber {
    async fn check(&self, url: &str) -> ProbeResult {
        let request = match self.method {
            ProbeMethod::Head => self.http.head(url),
            ProbeMethod::Get => self.http.get(url),
        };

        match request.send().await {
            Ok(response) => {
                let result = classify_status(response.status());
                debug!(url, status = %response.status(), %result, "Probe completed");
                result
            }
            Err(e) => {
                debug!(url, error = %e, timeout = e.is_timeout(), "Probe failed");
                ProbeResult::Indeterminate
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(StatusCode::NOT_FOUND), ProbeResult::NotFound);
        assert_eq!(classify_status(StatusCode::OK), ProbeResult::Found);
        assert_eq!(classify_status(StatusCode::MOVED_PERMANENTLY), ProbeResult::Found);
        assert_eq!(classify_status(StatusCode::FORBIDDEN), ProbeResult::Found);
        assert_eq!(classify_status(StatusCode::GONE), ProbeResult::Found);
        assert_eq!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR),
            ProbeResult::Found
        );
    }

    #[test]
    fn test_parse_probe_method() {
        assert_eq!("head".parse::<ProbeMethod>(), Ok(ProbeMethod::Head));
        assert_eq!("GET".parse::<ProbeMethod>(), Ok(ProbeMethod::Get));
        assert!("post".parse::<ProbeMethod>().is_err());
    }
}

//! Rate limiting middleware using token bucket algorithm.

use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::net::IpAddr;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Per-client key: the socket peer address, or the forwarded client address
/// when running behind a trusted reverse proxy.
#[derive(Debug, Clone, Copy)]
pub struct ClientIpKeyExtractor {
    behind_proxy: bool,
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        if self.behind_proxy {
            SmartIpKeyExtractor.extract(req)
        } else {
            PeerIpKeyExtractor.extract(req)
        }
    }
}

type ClientGovernorLayer =
    GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

fn build(behind_proxy: bool, per_second: u64, burst_size: u32) -> ClientGovernorLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(ClientIpKeyExtractor { behind_proxy })
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Creates a rate limiter for the resolution endpoint.
///
/// # Limits
///
/// - **Rate**: 20 requests per second
/// - **Burst**: 200 requests
///
/// Sized for page renders, each of which issues one batch request.
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// With `behind_proxy` the client IP is read from `X-Forwarded-For`,
/// `X-Real-IP` or `Forwarded`, falling back to the peer address.
pub fn layer(behind_proxy: bool) -> ClientGovernorLayer {
    build(behind_proxy, 20, 200)
}

/// Creates a stricter rate limiter for admin endpoints.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
pub fn secure_layer(behind_proxy: bool) -> ClientGovernorLayer {
    build(behind_proxy, 1, 10)
}

//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Each request gets an `INFO` span carrying method, URI and version.
/// Request start is logged at `DEBUG` (resolution traffic is high volume),
/// completion at `INFO` with status and latency in milliseconds, and 5xx
/// responses additionally at `WARN`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/api/resolve version=HTTP/1.1}: finished processing request latency=12 ms status=200
/// WARN request{method=POST uri=/api/cache/clear version=HTTP/1.1}: response failed classification=Status code: 500 Internal Server Error latency=3 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}

//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Opens an `INFO` span per request carrying method, URI and version, logs
/// request arrival at `DEBUG`, and logs status plus latency in milliseconds
/// at `INFO` when the response is produced. Request headers are left out of
/// the span because the gated endpoints receive passwords and tokens there.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=PUT uri=/api/v1/user version=HTTP/1.1}: finished processing request latency=1 ms status=400
/// INFO request{method=GET uri=/api/v1/secret/basic version=HTTP/1.1}: finished processing request latency=0 ms status=401
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(
            DefaultMakeSpan::new()
                .level(Level::INFO)
                .include_headers(false),
        )
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

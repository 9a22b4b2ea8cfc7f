//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "fancast_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "fancast_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "fancast_http_requests_in_flight";

    // Upstream service metrics
    pub const UPSTREAM_CALLS_TOTAL: &str = "fancast_upstream_calls_total";

    // Rate limiting metrics
    pub const RATE_LIMIT_HITS_TOTAL: &str = "fancast_rate_limit_hits_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record one call to an upstream service.
pub fn record_upstream_call(service: &str, operation: &str, success: bool) {
    let labels = [
        ("service", service.to_string()),
        ("operation", operation.to_string()),
        ("outcome", if success { "ok" } else { "error" }.to_string()),
    ];
    counter!(names::UPSTREAM_CALLS_TOTAL, &labels).increment(1);
}

/// Record rate limit hit.
pub fn record_rate_limit_hit(endpoint: &str) {
    let labels = [("endpoint", sanitize_path(endpoint))];
    counter!(names::RATE_LIMIT_HITS_TOTAL, &labels).increment(1);
}

/// Replace job handles in paths so label cardinality stays bounded.
fn sanitize_path(path: &str) -> String {
    let mut segments: Vec<&str> = path.split('/').collect();
    for i in 1..segments.len() {
        if segments[i - 1] == "video-job" && !segments[i].is_empty() {
            segments[i] = ":handle";
        }
    }
    segments.join("/")
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);
    let response = next.run(request).await;
    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path() {
        assert_eq!(
            sanitize_path("/video-job/764cabcf-b745-4b3e/status"),
            "/video-job/:handle/status"
        );
        assert_eq!(sanitize_path("/video-job/abc123/result"), "/video-job/:handle/result");
        assert_eq!(sanitize_path("/generate-storyboard"), "/generate-storyboard");
        assert_eq!(sanitize_path("/"), "/");
    }
}

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};
use service_core::observability::render_metrics;

/// Prometheus metrics endpoint.
pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        render_metrics(),
    )
}

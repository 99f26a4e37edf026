use axum::extract::{MatchedPath, Request};
use axum::{middleware::Next, response::Response};
use std::time::Instant;

/// Logs one line per request. Routes are reported by their template
/// (`/reviews/:place-id`) so ids don't end up in the `endpoint` field.
pub async fn tracing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());
    let client_ip = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .unwrap_or("127.0.0.1")
        .to_owned();

    let start_time = Instant::now();
    let response = next.run(request).await;
    let processing_time_us = start_time.elapsed().as_micros() as u64;
    let status = response.status();

    if status.is_server_error() {
        tracing::warn!(
            task = "http_request",
            http_method = %method,
            endpoint = %endpoint,
            client_ip = %client_ip,
            status = status.as_u16(),
            processing_time_us,
        );
    } else {
        tracing::info!(
            task = "http_request",
            http_method = %method,
            endpoint = %endpoint,
            client_ip = %client_ip,
            status = status.as_u16(),
            processing_time_us,
        );
    }

    response
}

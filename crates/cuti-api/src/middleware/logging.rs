//! Access log middleware.
//!
//! Every request gets an `x-request-id`: the caller's, when it sent one, or
//! a fresh UUIDv7. The id is echoed on the response so a client report can
//! be matched to the log line.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info, warn};
use uuid::Uuid;

pub static REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Logs method, route, status and latency of each request.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = request
        .headers()
        .get(&REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::now_v7().to_string());

    let method = request.method().clone();
    // Route template keeps ids out of the path field.
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let mut response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis();

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID.clone(), value);
    }

    if response.status().is_server_error() {
        error!(%request_id, %method, %route, status, latency_ms, "Request failed");
    } else if response.status().is_client_error() {
        warn!(%request_id, %method, %route, status, latency_ms, "Request rejected");
    } else {
        info!(%request_id, %method, %route, status, latency_ms, "Request completed");
    }

    response
}

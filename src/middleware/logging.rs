//! Request logging middleware

use std::time::Instant;

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use tracing::{info, warn};

/// Log every request with its outcome and latency
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = format!("{:.2}", started.elapsed().as_secs_f64() * 1000.0);

    // Rejected admin calls surface as 401 and are worth a warning too
    if response.status().is_server_error() || response.status().is_client_error() {
        warn!(%method, %path, status, elapsed_ms = %elapsed_ms, "Request failed");
    } else {
        info!(%method, %path, status, elapsed_ms = %elapsed_ms, "Request completed");
    }

    response
}

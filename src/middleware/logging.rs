//! Logging middleware

use std::time::Instant;

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use tracing::{info, warn, Instrument};
use uuid::Uuid;

/// Request logging middleware
///
/// Wraps every request in a span carrying a fresh request id, so the log
/// lines emitted by handlers and stores can be correlated.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = Uuid::new_v4();

    let span = tracing::info_span!("request", %request_id, %method, %path);
    let response = next.run(request).instrument(span.clone()).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    let _entered = span.enter();
    if status.is_client_error() || status.is_server_error() {
        warn!(
            status = %status.as_u16(),
            duration_ms = %format!("{:.2}", duration_ms),
            "Request rejected"
        );
    } else {
        info!(
            status = %status.as_u16(),
            duration_ms = %format!("{:.2}", duration_ms),
            "Request completed"
        );
    }

    response
}

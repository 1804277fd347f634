use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;

use super::format::format_size;

/// Logs method, path, status, duration and body size of every request.
///
/// The body is buffered to learn its real size, then handed back unchanged.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(
                "{} {} -> {} | {}ms | body read error: {}",
                method,
                path,
                parts.status.as_u16(),
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let elapsed = start.elapsed().as_millis();
    if parts.status.is_success() {
        tracing::info!(
            "{} {} -> {} | {}ms | {}",
            method,
            path,
            parts.status.as_u16(),
            elapsed,
            format_size(bytes.len())
        );
    } else {
        tracing::warn!(
            "{} {} -> {} | {}ms | {}",
            method,
            path,
            parts.status.as_u16(),
            elapsed,
            format_size(bytes.len())
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}

/// Test utilities for verifier integration tests
/// Stand-in applications with controllable `/health` behaviour
use axum::{
    body::Body,
    http::{header, StatusCode},
    routing::get,
    Router,
};
use futures::StreamExt;
use std::time::Duration;

pub const HEALTHY_BODY: &str = r#"{"status":"healthy"}"#;

/// Application whose `/health` answers 200 with `body` as JSON
pub fn json_router(body: &'static str) -> Router {
    status_router(StatusCode::OK, body)
}

/// Application whose `/health` answers `status` with `body` as JSON
pub fn status_router(status: StatusCode, body: &'static str) -> Router {
    Router::new().route(
        "/health",
        get(move || async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }),
    )
}

/// Application whose `/health` answers 200 with `body` as plain text
pub fn text_router(body: &'static str) -> Router {
    Router::new().route(
        "/health",
        get(move || async move { ([(header::CONTENT_TYPE, "text/plain")], body) }),
    )
}

/// Application that reports healthy
pub fn healthy_router() -> Router {
    json_router(HEALTHY_BODY)
}

/// Application that streams its `/health` body in separate chunks
///
/// Each chunk is delayed so the client sees them arrive one at a time.
pub fn chunked_router(chunks: Vec<&'static str>) -> Router {
    Router::new().route(
        "/health",
        get(move || {
            let chunks = chunks.clone();
            async move {
                let stream = futures::stream::iter(chunks).then(|chunk| async move {
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    Ok::<_, std::io::Error>(chunk)
                });
                ([(header::CONTENT_TYPE, "application/json")], Body::from_stream(stream))
            }
        }),
    )
}

/// Application that accepts the request but never answers
pub fn hanging_router() -> Router {
    Router::new().route(
        "/health",
        get(|| async {
            std::future::pending::<()>().await;
            HEALTHY_BODY
        }),
    )
}

/// Split captured console output into lines
pub fn lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .map(str::to_string)
        .collect()
}

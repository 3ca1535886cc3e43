use crate::config::Config;
use crate::handlers;
use axum::{routing::get, Router};
use common::HEALTH_PATH;
use tower_http::trace::TraceLayer;

/// Build the application's request handler with all routes and middleware
pub fn app() -> Router {
    Router::new()
        .route(HEALTH_PATH, get(handlers::health_handler))
        .fallback(handlers::fallback_handler)
        .layer(TraceLayer::new_for_http())
}

pub async fn start(config: Config) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("{} listening on {}", crate::SERVICE_NAME, listener.local_addr()?);

    axum::serve(listener, app()).await?;

    Ok(())
}

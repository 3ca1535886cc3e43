use crate::SERVICE_NAME;
use axum::Json;
use common::HealthResponse;

/// Health check endpoint
///
/// Returns 200 OK with `{"status":"healthy"}` for as long as the process can serve requests
#[tracing::instrument]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(SERVICE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        let value = response.0;

        assert!(value.is_healthy());
        assert_eq!(value.service.as_deref(), Some("mvp-app"));
    }
}

use serde::{Deserialize, Serialize};

/// Route served by every health-checked application
pub const HEALTH_PATH: &str = "/health";

/// The only `status` value a health check accepts as passing
pub const HEALTHY: &str = "healthy";

/// Body returned by `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl HealthResponse {
    pub fn healthy(service: impl Into<String>) -> Self {
        Self {
            status: HEALTHY.to_string(),
            service: Some(service.into()),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HEALTHY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let resp = HealthResponse::healthy("svc");

        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"status":"healthy","service":"svc"}"#);
    }

    #[test]
    fn test_health_response_skip_none_service() {
        let resp = HealthResponse {
            status: HEALTHY.to_string(),
            service: None,
        };

        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("service"));
    }

    #[test]
    fn test_is_healthy() {
        assert!(HealthResponse::healthy("svc").is_healthy());

        let degraded: HealthResponse = serde_json::from_str(r#"{"status":"degraded"}"#).unwrap();
        assert!(!degraded.is_healthy());
        assert_eq!(degraded.service, None);
    }
}

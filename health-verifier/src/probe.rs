use crate::error::{VerifyError, VerifyResult};
use common::HEALTHY;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use std::time::Duration;

/// Raw response to the health request
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Single-shot HTTP client for the health endpoint
#[derive(Debug, Clone)]
pub struct Probe {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl Probe {
    pub fn new(timeout: Option<Duration>) -> VerifyResult<Self> {
        // Loopback traffic must never be routed through a system proxy
        let client = reqwest::Client::builder().no_proxy().build()?;

        Ok(Self { client, timeout })
    }

    /// GET `url` and collect the whole body
    pub async fn fetch(&self, url: &str) -> VerifyResult<ProbeResponse> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.get(url))
                .await
                .map_err(|_| VerifyError::Timeout(limit))?,
            None => self.get(url).await,
        }
    }

    async fn get(&self, url: &str) -> VerifyResult<ProbeResponse> {
        tracing::debug!("GET {}", url);

        let mut response = self.client.get(url).send().await?;
        let status = response.status();

        // Chunks are appended in arrival order
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            body.extend_from_slice(&chunk);
        }

        tracing::debug!("Received {} with {} byte body", status, body.len());

        Ok(ProbeResponse { status, body })
    }
}

/// Parse a health body. Anything other than a JSON object is rejected.
pub fn parse_payload(body: &[u8]) -> VerifyResult<Map<String, Value>> {
    Ok(serde_json::from_slice(body)?)
}

/// Pass only when `status` is exactly the string `"healthy"`
pub fn check_status(payload: &Map<String, Value>) -> VerifyResult<()> {
    match payload.get("status") {
        Some(Value::String(status)) if status == HEALTHY => Ok(()),
        Some(Value::String(status)) => Err(VerifyError::AssertionMismatch(format!(
            "status is {:?}",
            status
        ))),
        Some(other) => Err(VerifyError::AssertionMismatch(format!(
            "status is not a string: {}",
            other
        ))),
        None => Err(VerifyError::AssertionMismatch(
            "status field is missing".to_string(),
        )),
    }
}

//! HTTP transport for a locally hosted evaluation service.
//!
//! `POST {base}/best-move` with `{"position": "<id>"}`, answered by
//! `{"output": "<hint text>"}`. Error responses may carry a `detail` field.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::debug;

use super::error::EngineError;
use super::transport::EngineTransport;

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";

#[derive(Serialize)]
struct BestMoveRequest<'a> {
    position: &'a str,
}

#[derive(Deserialize)]
struct BestMoveResponse {
    output: String,
}

pub struct ServiceTransport {
    base_url: String,
    client: reqwest::Client,
}

impl ServiceTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/best-move", self.base_url)
    }
}

/// Pull `detail` out of an error body; non-string details are rendered as JSON.
fn error_detail(body: &str) -> Option<String> {
    let value: JsonValue = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        JsonValue::String(detail) => Some(detail.clone()),
        JsonValue::Null => None,
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl EngineTransport for ServiceTransport {
    async fn hint(&self, position_id: &str) -> Result<String, EngineError> {
        let url = self.endpoint();
        debug!(url = %url, position_id, "Requesting hint from engine service");

        let response = self
            .client
            .post(&url)
            .json(&BestMoveRequest {
                position: position_id,
            })
            .send()
            .await
            .map_err(|e| EngineError::execution(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = error_detail(&body)
                .unwrap_or_else(|| format!("engine service returned {status}"));
            return Err(EngineError::execution(detail));
        }

        let body: BestMoveResponse = response.json().await.map_err(|e| {
            EngineError::execution(format!("malformed engine service response: {e}"))
        })?;
        Ok(body.output)
    }

    fn describe(&self) -> String {
        format!("service:{}", self.base_url)
    }
}

//! Relay client for the hosted generation endpoint
//!
//! Speaks the workspace relay contract: POST `{prompt, engine, language}`,
//! receive `{success: true, output}` or `{success: false, message}`. One
//! round trip per request, no retries; classification of failures follows
//! the response status and content type.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use tracing::{debug, error};
use uuid::Uuid;

use crate::error::{Error, Result};

use super::{GenerationProvider, GenerationRequest, GenerationResponse};

/// Client for the hosted relay endpoint
pub struct RelayClient {
    client: Client,
    endpoint: Option<String>,
}

impl RelayClient {
    /// Create a new client (endpoint loaded from environment if not provided)
    pub fn new(endpoint: Option<String>) -> Self {
        let endpoint = endpoint.or_else(|| std::env::var("RACHNAX_RELAY_URL").ok());

        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Set the endpoint to use
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    fn endpoint(&self) -> Result<&str> {
        self.endpoint
            .as_deref()
            .ok_or_else(|| Error::RelayNotConfigured("Relay endpoint not set".to_string()))
    }
}

/// Wire envelope returned by the relay on both outcomes
#[derive(Debug, Deserialize)]
struct RelayBody {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    output: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Classify a non-success relay response into its reportable message.
///
/// A JSON body contributes its `message` field; anything else collapses to
/// a generic line carrying the status code.
fn error_message(status: StatusCode, content_type: Option<&str>, body: &str) -> String {
    if content_type.is_some_and(|ct| ct.contains("application/json")) {
        serde_json::from_str::<RelayErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| "Generation failed".to_string())
    } else {
        format!("Request failed: {}", status.as_u16())
    }
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains("application/json"))
}

/// Traceability id attached to each dispatch, `req_<unix-millis>_<suffix>`
fn request_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("req_{}_{}", Utc::now().timestamp_millis(), &suffix[..9])
}

#[async_trait]
impl GenerationProvider for RelayClient {
    fn name(&self) -> &'static str {
        "Relay"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        let endpoint = self.endpoint()?;

        // id and timestamp are for log correlation only, never for retries
        let request_id = request_id();
        debug!(
            "Dispatching generation request {} ({}, engine={}) at {}",
            request_id,
            endpoint,
            request.engine.tag(),
            Utc::now().to_rfc3339()
        );

        let response = self
            .client
            .post(endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status, content_type.as_deref(), &body);
            error!("Relay error for {}: {} - {}", request_id, status, message);
            return Err(Error::Generation(message));
        }

        if !is_json(content_type.as_deref()) {
            error!("Relay returned non-JSON body for {}", request_id);
            return Err(Error::Generation("Invalid response format".to_string()));
        }

        let body: RelayBody = response.json().await?;

        if !body.success {
            let message = body
                .message
                .unwrap_or_else(|| "Generation failed".to_string());
            error!("Relay reported failure for {}: {}", request_id, message);
            return Err(Error::Generation(message));
        }

        let output = body
            .output
            .ok_or_else(|| Error::Generation("Generation failed".to_string()))?;

        debug!("Relay request {} completed ({} bytes)", request_id, output.len());

        Ok(GenerationResponse {
            output,
            model: body.model,
        })
    }

    fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }
}

//! Generation provider trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Engine;

/// Request forwarded to a generation backend
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    /// Fully composed instruction prompt
    pub prompt: String,
    /// Engine the prompt was composed with (serialized as its wire tag)
    pub engine: Engine,
    /// Output language requested by the user
    pub language: String,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, engine: Engine, language: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            engine,
            language: language.into(),
        }
    }
}

/// Normalized response from a generation backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Generated markdown content
    pub output: String,
    /// Model reported by the backend, when available
    #[serde(default)]
    pub model: Option<String>,
}

/// Trait for content generation backends
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &'static str;

    /// Forward a composed prompt and return the generated content
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse>;

    /// Check if the provider is configured and ready
    fn is_configured(&self) -> bool;
}

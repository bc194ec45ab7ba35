//! Ordered provider fallback
//!
//! Tries each configured provider strategy in sequence. The first success
//! wins; unconfigured providers are skipped and recorded; an aggregate
//! failure is reported only when every strategy has failed.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{Error, Result};

use super::{GenerationProvider, GenerationRequest, GenerationResponse};

/// A provider that delegates to an ordered list of fallback strategies
#[derive(Default)]
pub struct FallbackChain {
    providers: Vec<Box<dyn GenerationProvider>>,
}

impl FallbackChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Append a provider strategy to the end of the chain
    pub fn push(mut self, provider: impl GenerationProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl GenerationProvider for FallbackChain {
    fn name(&self) -> &'static str {
        "Fallback chain"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        let mut failures: Vec<String> = Vec::new();

        for provider in &self.providers {
            if !provider.is_configured() {
                debug!("Skipping unconfigured provider {}", provider.name());
                failures.push(format!("{}: not configured", provider.name()));
                continue;
            }

            match provider.generate(request.clone()).await {
                Ok(response) => {
                    debug!("Provider {} succeeded", provider.name());
                    return Ok(response);
                }
                Err(e) => {
                    warn!("Provider {} failed: {}", provider.name(), e);
                    failures.push(format!("{}: {}", provider.name(), e));
                }
            }
        }

        if failures.is_empty() {
            return Err(Error::Generation(
                "No generation providers configured".to_string(),
            ));
        }

        Err(Error::Generation(format!(
            "All providers failed ({})",
            failures.join("; ")
        )))
    }

    fn is_configured(&self) -> bool {
        self.providers.iter().any(|p| p.is_configured())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Engine;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubProvider {
        name: &'static str,
        configured: bool,
        output: Option<&'static str>,
        calls: Arc<AtomicUsize>,
    }

    impl StubProvider {
        fn new(name: &'static str, configured: bool, output: Option<&'static str>) -> Self {
            Self {
                name,
                configured,
                output,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn calls(&self) -> Arc<AtomicUsize> {
            self.calls.clone()
        }
    }

    #[async_trait]
    impl GenerationProvider for StubProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn generate(&self, _request: GenerationRequest) -> Result<GenerationResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.output {
                Some(output) => Ok(GenerationResponse {
                    output: output.to_string(),
                    model: None,
                }),
                None => Err(Error::Generation(format!("{} is down", self.name))),
            }
        }

        fn is_configured(&self) -> bool {
            self.configured
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("prompt", Engine::Hybrid, "English")
    }

    #[tokio::test]
    async fn test_first_configured_provider_wins() {
        let secondary = StubProvider::new("secondary", true, Some("from secondary"));
        let secondary_calls = secondary.calls();

        let chain = FallbackChain::new()
            .push(StubProvider::new("primary", true, Some("from primary")))
            .push(secondary);

        let response = chain.generate(request()).await.unwrap();
        assert_eq!(response.output, "from primary");
        assert_eq!(secondary_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_falls_through_to_next_on_failure() {
        let chain = FallbackChain::new()
            .push(StubProvider::new("primary", true, None))
            .push(StubProvider::new("secondary", true, Some("recovered")));

        let response = chain.generate(request()).await.unwrap();
        assert_eq!(response.output, "recovered");
    }

    #[tokio::test]
    async fn test_unconfigured_providers_are_skipped() {
        let skipped = StubProvider::new("skipped", false, Some("never"));
        let skipped_calls = skipped.calls();

        let chain = FallbackChain::new()
            .push(skipped)
            .push(StubProvider::new("live", true, Some("served")));

        let response = chain.generate(request()).await.unwrap();
        assert_eq!(response.output, "served");
        assert_eq!(skipped_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_aggregate_error_names_every_strategy() {
        let chain = FallbackChain::new()
            .push(StubProvider::new("alpha", true, None))
            .push(StubProvider::new("beta", false, None))
            .push(StubProvider::new("gamma", true, None));

        let err = chain.generate(request()).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("alpha"));
        assert!(message.contains("beta: not configured"));
        assert!(message.contains("gamma"));
    }

    #[tokio::test]
    async fn test_empty_chain_reports_no_providers() {
        let chain = FallbackChain::new();
        assert!(chain.is_empty());
        assert!(!chain.is_configured());

        let err = chain.generate(request()).await.unwrap_err();
        assert!(err.to_string().contains("No generation providers configured"));
    }

    #[test]
    fn test_is_configured_requires_one_live_provider() {
        let chain = FallbackChain::new()
            .push(StubProvider::new("a", false, None))
            .push(StubProvider::new("b", true, None));
        assert!(chain.is_configured());
        assert_eq!(chain.len(), 2);
    }
}

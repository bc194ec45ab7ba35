//! Generation pipeline
//!
//! Drives one generation attempt: collect → select engine → build prompt →
//! dispatch to the provider. The pipeline owns no UI state; the caller
//! renders the outcome and keeps whatever it chooses to display.

use tracing::{debug, error};

use crate::engines::select_engine;
use crate::providers::{GenerationProvider, GenerationRequest};
use crate::templates::build_prompt;
use crate::types::{Engine, FieldError};
use crate::workspace::{RawWorkspaceInput, collect};

/// User-facing message when engine selection fails
pub const SELECTION_ERROR_MESSAGE: &str =
    "Something went wrong with engine selection. Let's try that again.";

/// Generic user-facing message for transport and backend failures
pub const GENERATION_ERROR_MESSAGE: &str = "Something went wrong. Let's try that again.";

/// Outcome of a single generation attempt, consumed by the rendering layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Generated markdown content ready to display
    Content { output: String, engine: Engine },
    /// Validation rejected the input; no prompt was built
    Rejected(Vec<FieldError>),
    /// The request failed after validation; the message is safe to display
    Failed { message: String },
}

impl GenerationOutcome {
    pub fn is_content(&self) -> bool {
        matches!(self, Self::Content { .. })
    }
}

/// One-shot generation pipeline over a provider
pub struct GenerationPipeline {
    provider: Box<dyn GenerationProvider>,
}

impl GenerationPipeline {
    pub fn new(provider: impl GenerationProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
        }
    }

    /// Run a full generation attempt from raw form values.
    ///
    /// Validation failure aborts before engine selection; backend errors are
    /// logged and collapsed into the generic user-facing message. Nothing is
    /// retried; a fresh attempt starts from the caller.
    pub async fn generate(&self, input: &RawWorkspaceInput) -> GenerationOutcome {
        let request = match collect(input) {
            Ok(request) => request,
            Err(errors) => return GenerationOutcome::Rejected(errors),
        };

        let Some(engine) = select_engine(&request) else {
            error!("Engine selection failed for a validated request");
            return GenerationOutcome::Failed {
                message: SELECTION_ERROR_MESSAGE.to_string(),
            };
        };

        let prompt = build_prompt(&request, engine);

        debug!(
            "Generation dispatch: engine={}, identity={:?}, intent={:?}, prompt_len={}",
            engine.tag(),
            request.identity,
            request.creation_intent,
            prompt.len()
        );

        let language = request.context_refinement.language().to_string();
        let generation = GenerationRequest::new(prompt, engine, language);

        match self.provider.generate(generation).await {
            Ok(response) => GenerationOutcome::Content {
                output: response.output,
                engine,
            },
            Err(e) => {
                error!("Generation failed: {}", e);
                GenerationOutcome::Failed {
                    message: GENERATION_ERROR_MESSAGE.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::providers::GenerationResponse;
    use crate::workspace::IDENTITY_FIELD;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RecordingProvider {
        output: Option<&'static str>,
        calls: Arc<AtomicUsize>,
        last_engine: Arc<std::sync::Mutex<Option<Engine>>>,
    }

    impl RecordingProvider {
        fn new(output: Option<&'static str>) -> Self {
            Self {
                output,
                calls: Arc::new(AtomicUsize::new(0)),
                last_engine: Arc::new(std::sync::Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl GenerationProvider for RecordingProvider {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_engine.lock().unwrap() = Some(request.engine);
            match self.output {
                Some(output) => Ok(GenerationResponse {
                    output: output.to_string(),
                    model: None,
                }),
                None => Err(Error::Generation("backend down".to_string())),
            }
        }

        fn is_configured(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_successful_generation_routes_and_returns_content() {
        let provider = RecordingProvider::new(Some("# Sleep and Memory"));
        let engine_seen = provider.last_engine.clone();
        let pipeline = GenerationPipeline::new(provider);

        let input =
            RawWorkspaceInput::new("Student", "Research Paper", "Effects of sleep on memory");
        let outcome = pipeline.generate(&input).await;

        assert_eq!(
            outcome,
            GenerationOutcome::Content {
                output: "# Sleep and Memory".to_string(),
                engine: Engine::Academic,
            }
        );
        assert_eq!(*engine_seen.lock().unwrap(), Some(Engine::Academic));
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_the_provider() {
        let provider = RecordingProvider::new(Some("never"));
        let calls = provider.calls.clone();
        let pipeline = GenerationPipeline::new(provider);

        let outcome = pipeline.generate(&RawWorkspaceInput::default()).await;

        match outcome {
            GenerationOutcome::Rejected(errors) => {
                assert_eq!(errors.len(), 3);
                assert_eq!(errors[0].field, IDENTITY_FIELD);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_backend_failure_surfaces_generic_message() {
        let pipeline = GenerationPipeline::new(RecordingProvider::new(None));

        let input = RawWorkspaceInput::new("Entrepreneur", "Startup Pitch", "An app for plants");
        let outcome = pipeline.generate(&input).await;

        assert_eq!(
            outcome,
            GenerationOutcome::Failed {
                message: GENERATION_ERROR_MESSAGE.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_unmatched_pair_generates_through_hybrid() {
        let provider = RecordingProvider::new(Some("blended"));
        let engine_seen = provider.last_engine.clone();
        let pipeline = GenerationPipeline::new(provider);

        let input = RawWorkspaceInput::new("Freelancer", "Blog Post", "Remote work habits");
        let outcome = pipeline.generate(&input).await;

        assert!(outcome.is_content());
        assert_eq!(*engine_seen.lock().unwrap(), Some(Engine::Hybrid));
    }
}

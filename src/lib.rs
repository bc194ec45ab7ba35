//! RachnaX Core - Content-generation workspace engine
//!
//! Collects structured workspace input, routes it to one of four prompt
//! engines, composes the full instruction prompt, and forwards it through a
//! relay client to a hosted generation endpoint.

pub mod catalog;
pub mod engines;
pub mod error;
pub mod pipeline;
pub mod providers;
pub mod templates;
pub mod types;
pub mod workspace;

pub use error::{Error, Result};
pub use types::*;

/// Re-export the main pipeline components for convenience
pub use engines::select_engine;
pub use pipeline::{GenerationOutcome, GenerationPipeline};
pub use providers::{FallbackChain, GenerationProvider, RelayClient};
pub use templates::{build_prompt, build_prompt_for_tag};
pub use workspace::{RawWorkspaceInput, collect};

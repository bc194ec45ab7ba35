//! Provider abstraction layer for content generation backends
//!
//! The hosted relay endpoint is the primary strategy; `FallbackChain`
//! composes alternates in an explicit order.
mod fallback;
mod generation;
mod relay;

pub use fallback::FallbackChain;
pub use generation::{GenerationProvider, GenerationRequest, GenerationResponse};
pub use relay::RelayClient;

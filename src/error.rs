//! Error types for the RachnaX core

use thiserror::Error;

/// Result type alias using the RachnaX Error type
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the generation core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Engine selection failed: {0}")]
    Selection(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Relay not configured: {0}")]
    RelayNotConfigured(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

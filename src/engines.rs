//! Engine routing
//!
//! Deterministic classifier mapping an (identity, creation intent) pair to
//! one of the four prompt engines. Rules are evaluated in order, first match
//! wins; every unmatched combination lands on the hybrid engine.
//!
//! The Engine enum is defined in types.rs, this module provides the
//! classification rules.

use tracing::{debug, warn};

use crate::types::WorkspaceRequest;

// Re-export Engine from types for convenience
pub use crate::types::Engine;

const ACADEMIC_IDENTITIES: &[&str] = &["Student", "Teacher", "Competitive Aspirant"];
const ACADEMIC_INTENTS: &[&str] = &[
    "Academic Assignment",
    "Exam Answer",
    "Topic Explanation",
    "Research Paper",
    "Debate Speech",
];

const BUSINESS_IDENTITIES: &[&str] = &["Entrepreneur", "Business Professional", "Marketer"];
const BUSINESS_INTENTS: &[&str] = &[
    "SEO Article",
    "Cold Email",
    "Sales Page",
    "Landing Page",
    "Startup Pitch",
];

const CREATOR_IDENTITIES: &[&str] = &["Content Creator", "Influencer"];
const CREATOR_INTENTS: &[&str] = &[
    "Blog Post",
    "Instagram Script",
    "Instagram Caption",
    "YouTube Script",
    "Storytelling Post",
    "Podcast Script",
    "Article",
];

/// Classify a request into one of the four engines.
///
/// Returns `None` only when identity or creation intent is empty; the
/// collector guarantees both are present on any request it produced, so a
/// `None` here means the request bypassed validation.
pub fn select_engine(request: &WorkspaceRequest) -> Option<Engine> {
    if request.identity.is_empty() || request.creation_intent.is_empty() {
        warn!("Engine selection invoked without identity or creation intent");
        return None;
    }

    let identity = request.identity.as_str();
    let intent = request.creation_intent.as_str();

    let engine = if ACADEMIC_IDENTITIES.contains(&identity) && ACADEMIC_INTENTS.contains(&intent) {
        Engine::Academic
    } else if BUSINESS_IDENTITIES.contains(&identity) && BUSINESS_INTENTS.contains(&intent) {
        Engine::Business
    } else if CREATOR_IDENTITIES.contains(&identity) && CREATOR_INTENTS.contains(&intent) {
        Engine::Creator
    } else {
        Engine::Hybrid
    };

    debug!(
        "Engine routing: identity={:?}, intent={:?}, engine={}",
        identity,
        intent,
        engine.tag()
    );
    Some(engine)
}

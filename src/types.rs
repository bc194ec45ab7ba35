//! Core types used throughout the RachnaX workspace

use serde::{Deserialize, Serialize};

/// Prompt-composition engine keyed by the (identity, creation intent) classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Engine {
    /// Logically structured, analytically strong academic content
    #[serde(rename = "academic_engine")]
    Academic,
    /// Persuasive, conversion-focused business content
    #[serde(rename = "business_engine")]
    Business,
    /// High-engagement, platform-native creator content
    #[serde(rename = "creator_engine")]
    Creator,
    /// Catch-all blend of clarity and engagement
    #[default]
    #[serde(rename = "hybrid_engine")]
    Hybrid,
}

impl Engine {
    /// Get the wire tag for this engine
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Academic => "academic_engine",
            Self::Business => "business_engine",
            Self::Creator => "creator_engine",
            Self::Hybrid => "hybrid_engine",
        }
    }

    /// Parse a wire tag back into an engine
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "academic_engine" => Some(Self::Academic),
            "business_engine" => Some(Self::Business),
            "creator_engine" => Some(Self::Creator),
            "hybrid_engine" => Some(Self::Hybrid),
            _ => None,
        }
    }

    /// Get all available engines
    pub fn all() -> &'static [Engine] {
        &[
            Engine::Academic,
            Engine::Business,
            Engine::Creator,
            Engine::Hybrid,
        ]
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Optional refinement parameters layered onto a request
///
/// Unset fields mean "unspecified"; the templates substitute their own
/// per-engine defaults when rendering. `language` always carries a value
/// and defaults to English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextRefinement {
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub language_complexity: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for ContextRefinement {
    fn default() -> Self {
        Self {
            audience: None,
            platform: None,
            tone: None,
            language_complexity: None,
            length: None,
            language: default_language(),
        }
    }
}

impl ContextRefinement {
    /// Output language, falling back to English when blank
    pub fn language(&self) -> &str {
        if self.language.is_empty() {
            "English"
        } else {
            &self.language
        }
    }
}

fn default_language() -> String {
    "English".to_string()
}

/// A validated workspace request, created per generation attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRequest {
    /// The user's declared persona
    pub identity: String,
    /// The declared content type to generate
    pub creation_intent: String,
    /// Free-text idea the content is built from
    pub raw_idea: String,
    #[serde(default)]
    pub context_refinement: ContextRefinement,
    /// Ordered structural section selections (possibly empty)
    #[serde(default)]
    pub structure_customization: Vec<String>,
    /// Request a pre-output reasoning block before the final content
    #[serde(default)]
    pub brainstorm_mode: bool,
}

impl WorkspaceRequest {
    pub fn new(
        identity: impl Into<String>,
        creation_intent: impl Into<String>,
        raw_idea: impl Into<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            creation_intent: creation_intent.into(),
            raw_idea: raw_idea.into(),
            context_refinement: ContextRefinement::default(),
            structure_customization: Vec::new(),
            brainstorm_mode: false,
        }
    }

    pub fn with_refinement(mut self, refinement: ContextRefinement) -> Self {
        self.context_refinement = refinement;
        self
    }

    pub fn with_structure(mut self, sections: Vec<String>) -> Self {
        self.structure_customization = sections;
        self
    }

    pub fn with_brainstorm(mut self, enabled: bool) -> Self {
        self.brainstorm_mode = enabled;
        self
    }
}

/// A field-level validation error surfaced to the form layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Form field id the error annotates
    pub field: String,
    /// Human-readable message shown next to the field
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

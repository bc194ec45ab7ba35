//! Workspace input collection and validation
//!
//! Turns raw form values into a validated [`WorkspaceRequest`], or a list of
//! per-field errors the form layer renders inline. Validation failure aborts
//! the attempt before engine selection runs.

use serde::{Deserialize, Serialize};

use crate::types::{ContextRefinement, FieldError, WorkspaceRequest};

/// Form field id for the identity selector
pub const IDENTITY_FIELD: &str = "identity-selector";
/// Form field id for the creation intent selector
pub const CREATION_INTENT_FIELD: &str = "creation-intent-selector";
/// Form field id for the raw idea canvas
pub const RAW_IDEA_FIELD: &str = "raw-idea-canvas";

/// Raw, unvalidated form values as the UI layer hands them over
///
/// Every field is optional; the collector decides what is missing. Free-text
/// refinements (audience, platform) are trimmed, select values pass through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWorkspaceInput {
    #[serde(default)]
    pub identity: Option<String>,
    #[serde(default)]
    pub creation_intent: Option<String>,
    #[serde(default)]
    pub raw_idea: Option<String>,
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
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub structure_customization: Vec<String>,
    #[serde(default)]
    pub brainstorm_mode: bool,
}

impl RawWorkspaceInput {
    pub fn new(
        identity: impl Into<String>,
        creation_intent: impl Into<String>,
        raw_idea: impl Into<String>,
    ) -> Self {
        Self {
            identity: Some(identity.into()),
            creation_intent: Some(creation_intent.into()),
            raw_idea: Some(raw_idea.into()),
            ..Self::default()
        }
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
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

/// Validate raw form values into a [`WorkspaceRequest`].
///
/// All failed required fields are reported at once so the form layer can
/// annotate them in a single pass. On failure no request is produced and
/// downstream stages must not run.
pub fn collect(input: &RawWorkspaceInput) -> Result<WorkspaceRequest, Vec<FieldError>> {
    let mut errors = Vec::new();

    let identity = required(&input.identity);
    if identity.is_none() {
        errors.push(FieldError::new(IDENTITY_FIELD, "Tell us who you are"));
    }

    let creation_intent = required(&input.creation_intent);
    if creation_intent.is_none() {
        errors.push(FieldError::new(
            CREATION_INTENT_FIELD,
            "What would you like to create?",
        ));
    }

    let raw_idea = required(&input.raw_idea);
    if raw_idea.is_none() {
        errors.push(FieldError::new(
            RAW_IDEA_FIELD,
            "Share your idea to get started",
        ));
    }

    match (identity, creation_intent, raw_idea) {
        (Some(identity), Some(creation_intent), Some(raw_idea)) => Ok(WorkspaceRequest {
            identity,
            creation_intent,
            raw_idea,
            context_refinement: ContextRefinement {
                audience: trimmed(&input.audience),
                platform: trimmed(&input.platform),
                tone: selected(&input.tone),
                language_complexity: selected(&input.language_complexity),
                length: selected(&input.length),
                language: selected(&input.language).unwrap_or_else(|| "English".to_string()),
            },
            structure_customization: input.structure_customization.clone(),
            brainstorm_mode: input.brainstorm_mode,
        }),
        _ => Err(errors),
    }
}

/// Required field: present and non-whitespace, original value kept
fn required(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
}

/// Free-text refinement: trimmed, blank collapses to unspecified
fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

/// Select refinement: empty selection collapses to unspecified
fn selected(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_valid_input() {
        let input = RawWorkspaceInput::new("Student", "Research Paper", "Effects of sleep on memory");
        let request = collect(&input).unwrap();

        assert_eq!(request.identity, "Student");
        assert_eq!(request.creation_intent, "Research Paper");
        assert_eq!(request.raw_idea, "Effects of sleep on memory");
        assert_eq!(request.context_refinement.language(), "English");
        assert!(request.context_refinement.tone.is_none());
        assert!(request.structure_customization.is_empty());
        assert!(!request.brainstorm_mode);
    }

    #[test]
    fn test_collect_missing_identity() {
        let input = RawWorkspaceInput {
            identity: Some(String::new()),
            creation_intent: Some("Blog Post".to_string()),
            raw_idea: Some("An idea".to_string()),
            ..Default::default()
        };

        let errors = collect(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, IDENTITY_FIELD);
        assert_eq!(errors[0].message, "Tell us who you are");
    }

    #[test]
    fn test_collect_whitespace_only_counts_as_missing() {
        let input = RawWorkspaceInput {
            identity: Some("Student".to_string()),
            creation_intent: Some("   ".to_string()),
            raw_idea: Some("\t\n".to_string()),
            ..Default::default()
        };

        let errors = collect(&input).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, CREATION_INTENT_FIELD);
        assert_eq!(errors[0].message, "What would you like to create?");
        assert_eq!(errors[1].field, RAW_IDEA_FIELD);
        assert_eq!(errors[1].message, "Share your idea to get started");
    }

    #[test]
    fn test_collect_all_fields_missing() {
        let errors = collect(&RawWorkspaceInput::default()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].field, IDENTITY_FIELD);
        assert_eq!(errors[1].field, CREATION_INTENT_FIELD);
        assert_eq!(errors[2].field, RAW_IDEA_FIELD);
    }

    #[test]
    fn test_collect_trims_free_text_refinements() {
        let input = RawWorkspaceInput {
            audience: Some("  Founders  ".to_string()),
            platform: Some("   ".to_string()),
            ..RawWorkspaceInput::new("Entrepreneur", "Startup Pitch", "A pitch")
        };

        let request = collect(&input).unwrap();
        assert_eq!(request.context_refinement.audience.as_deref(), Some("Founders"));
        assert!(request.context_refinement.platform.is_none());
    }

    #[test]
    fn test_collect_empty_selects_are_unspecified() {
        let input = RawWorkspaceInput {
            tone: Some(String::new()),
            length: Some(String::new()),
            language: Some(String::new()),
            ..RawWorkspaceInput::new("Teacher", "Topic Explanation", "Gravity")
        };

        let request = collect(&input).unwrap();
        assert!(request.context_refinement.tone.is_none());
        assert!(request.context_refinement.length.is_none());
        assert_eq!(request.context_refinement.language(), "English");
    }

    #[test]
    fn test_collect_keeps_selected_values() {
        let input = RawWorkspaceInput::new("Marketer", "Cold Email", "Outreach")
            .with_tone("Persuasive")
            .with_language("Hindi")
            .with_structure(vec!["Subject Line".to_string()])
            .with_brainstorm(true);

        let request = collect(&input).unwrap();
        assert_eq!(request.context_refinement.tone.as_deref(), Some("Persuasive"));
        assert_eq!(request.context_refinement.language(), "Hindi");
        assert_eq!(request.structure_customization, vec!["Subject Line".to_string()]);
        assert!(request.brainstorm_mode);
    }

    #[test]
    fn test_collect_keeps_raw_idea_untrimmed() {
        // the idea is forwarded verbatim into the prompt
        let input = RawWorkspaceInput::new("Student", "Exam Answer", "  spaced idea  ");
        let request = collect(&input).unwrap();
        assert_eq!(request.raw_idea, "  spaced idea  ");
    }
}

//! Prompt template composition
//!
//! One composer per engine. Each renders the complete instruction prompt:
//! the persona header, an echoed parameter block with per-engine defaults,
//! the user's idea verbatim, the structure section (selected sections as
//! bullets, or the engine's fallback phrase), the engine's authoring rules,
//! an optional brainstorm block, and the trailing formatting directives.
//!
//! Composers are pure: identical requests render byte-identical prompts.

use tracing::warn;

use crate::types::{Engine, WorkspaceRequest};

/// Render the prompt for an engine selection.
pub fn build_prompt(request: &WorkspaceRequest, engine: Engine) -> String {
    match engine {
        Engine::Academic => academic_template(request),
        Engine::Business => business_template(request),
        Engine::Creator => creator_template(request),
        Engine::Hybrid => hybrid_template(request),
    }
}

/// Render the prompt for a raw engine tag.
///
/// An unrecognized tag degrades to the hybrid composer instead of failing
/// the request.
pub fn build_prompt_for_tag(request: &WorkspaceRequest, tag: &str) -> String {
    match Engine::from_tag(tag) {
        Some(engine) => build_prompt(request, engine),
        None => {
            warn!("Unknown engine tag {:?}, defaulting to hybrid template", tag);
            hybrid_template(request)
        }
    }
}

/// Selected sections as one bullet each, or the engine's fallback phrase
fn structure_block(selections: &[String], fallback: &str) -> String {
    if selections.is_empty() {
        fallback.to_string()
    } else {
        selections
            .iter()
            .map(|section| format!("- {section}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn academic_template(request: &WorkspaceRequest) -> String {
    let context = &request.context_refinement;
    let language = context.language();
    let structure = structure_block(
        &request.structure_customization,
        "Follow standard academic structure",
    );

    let mut prompt = format!(
        "You are RachnaX AI Academic Engine.\n\
         Generate logically structured, analytically strong academic content.\n\
         \n\
         User:\n\
         - Identity: {identity}\n\
         - Type: {intent}\n\
         - Audience: {audience}\n\
         - Tone: {tone}\n\
         - Complexity: {complexity}\n\
         - Length: {length}\n\
         - Language: {language}\n\
         \n\
         Topic:\n\
         {idea}\n\
         \n\
         Structure:\n\
         {structure}\n\
         \n\
         Rules:\n\
         - Strong logical flow.\n\
         - Deep reasoning with examples where useful.\n\
         - Follow structure exactly.\n\
         - Respect length and complexity.\n\
         - Whole Ouput from start to end fully in {language}.\n",
        identity = request.identity,
        intent = request.creation_intent,
        audience = context.audience.as_deref().unwrap_or("General"),
        tone = context.tone.as_deref().unwrap_or("Formal"),
        complexity = context.language_complexity.as_deref().unwrap_or("Intermediate"),
        length = context.length.as_deref().unwrap_or("Medium"),
        language = language,
        idea = request.raw_idea,
        structure = structure,
    );

    if request.brainstorm_mode {
        prompt.push_str(
            "\nBefore writing, provide:\n\
             \n\
             ## Academic Insights (max 120 words)\n\
             - Refined thesis\n\
             - 3 argument pillars\n\
             - 1 counterpoint\n\
             - Depth improvement tip\n\
             - Structure refinement tip\n\
             \n\
             Then:\n\
             \n\
             ## Final Academic Output\n",
        );
    }

    prompt.push_str(
        "\nFormatting:\n\
         - Markdown headings\n\
         - Bold key concepts\n\
         - Clear sections only\n",
    );

    prompt
}

fn business_template(request: &WorkspaceRequest) -> String {
    let context = &request.context_refinement;
    let language = context.language();
    let structure = structure_block(
        &request.structure_customization,
        "Business-optimized structure",
    );

    let mut prompt = format!(
        "You are RachnaX AI Business Engine.\n\
         Create persuasive, conversion-focused business content.\n\
         \n\
         User:\n\
         - Identity: {identity}\n\
         - Type: {intent}\n\
         - Audience: {audience}\n\
         - Platform: {platform}\n\
         - Tone: {tone}\n\
         - Complexity: {complexity}\n\
         - Length: {length}\n\
         - Language: {language}\n\
         \n\
         Idea:\n\
         {idea}\n\
         \n\
         Structure:\n\
         {structure}\n\
         \n\
         Rules:\n\
         - Lead with value proposition.\n\
         - Address pain points.\n\
         - Focus on benefits.\n\
         - Follow structure.\n\
         - Respect length.\n\
         - Whole Ouput from start to end fully in {language}.\n",
        identity = request.identity,
        intent = request.creation_intent,
        audience = context.audience.as_deref().unwrap_or("General"),
        platform = context.platform.as_deref().unwrap_or("General"),
        tone = context.tone.as_deref().unwrap_or("Professional"),
        complexity = context.language_complexity.as_deref().unwrap_or("Intermediate"),
        length = context.length.as_deref().unwrap_or("Medium"),
        language = language,
        idea = request.raw_idea,
        structure = structure,
    );

    if request.brainstorm_mode {
        prompt.push_str(
            "\nBefore writing, provide:\n\
             \n\
             ## Strategic Snapshot (max 120 words)\n\
             1. Market angle\n\
             2. Key risk\n\
             3. Value refinement\n\
             4. Conversion path\n\
             \n\
             Then:\n\
             \n\
             ## Conversion-Optimized Output\n",
        );
    }

    prompt.push_str(
        "\nFormatting:\n\
         - Markdown headings\n\
         - Bold benefits & CTAs\n\
         - Clear sections\n",
    );

    prompt
}

fn creator_template(request: &WorkspaceRequest) -> String {
    let context = &request.context_refinement;
    let language = context.language();
    let structure = structure_block(
        &request.structure_customization,
        "Platform-optimized structure",
    );

    let mut prompt = format!(
        "You are RachnaX AI Creator Engine.\n\
         Create high-engagement, platform-native content.\n\
         \n\
         User:\n\
         - Type: {intent}\n\
         - Platform: {platform}\n\
         - Audience: {audience}\n\
         - Tone: {tone}\n\
         - Complexity: {complexity}\n\
         - Length: {length}\n\
         - Language: {language}\n\
         \n\
         Idea:\n\
         {idea}\n\
         \n\
         Structure:\n\
         {structure}\n\
         \n\
         Rules:\n\
         - Start with strong hook.\n\
         - Maintain emotional/value flow.\n\
         - Adapt to platform behavior.\n\
         - Include CTA if relevant.\n\
         - Follow structure strictly.\n\
         - Respect length.\n\
         - Whole Ouput from start to end fully in {language}.\n",
        intent = request.creation_intent,
        platform = context.platform.as_deref().unwrap_or("General"),
        audience = context.audience.as_deref().unwrap_or("General"),
        tone = context.tone.as_deref().unwrap_or("Casual"),
        complexity = context.language_complexity.as_deref().unwrap_or("Intermediate"),
        length = context.length.as_deref().unwrap_or("Medium"),
        language = language,
        idea = request.raw_idea,
        structure = structure,
    );

    if request.brainstorm_mode {
        prompt.push_str(
            "\nBefore writing, provide:\n\
             \n\
             ## Idea Breakdown (max 130 words)\n\
             1. Power (2 bullets)\n\
             2. Risks (2 bullets)\n\
             3. Improvement (2 bullets)\n\
             4. Flow roadmap (4 steps max)\n\
             5. Platform fit (hook + retention + CTA)\n\
             \n\
             Then:\n\
             \n\
             ## Platform-Ready Content\n",
        );
    }

    prompt.push_str(
        "\nFormatting:\n\
         - Markdown headings\n\
         - Bold impactful lines\n\
         - Scannable layout\n",
    );

    prompt
}

fn hybrid_template(request: &WorkspaceRequest) -> String {
    let context = &request.context_refinement;
    let language = context.language();
    let structure = structure_block(&request.structure_customization, "Balanced structured flow");

    let mut prompt = format!(
        "You are RachnaX AI Hybrid Engine.\n\
         Blend clarity with engagement.\n\
         \n\
         User:\n\
         - Identity: {identity}\n\
         - Type: {intent}\n\
         - Platform: {platform}\n\
         - Audience: {audience}\n\
         - Tone: {tone}\n\
         - Complexity: {complexity}\n\
         - Length: {length}\n\
         - Language: {language}\n\
         \n\
         Idea:\n\
         {idea}\n\
         \n\
         Structure:\n\
         {structure}\n\
         \n\
         Rules:\n\
         - Clear structure + engaging flow.\n\
         - Simplify complex ideas.\n\
         - Maintain authority.\n\
         - Follow structure.\n\
         - Respect length.\n\
         - Whole Ouput from start to end fully in {language}.\n",
        identity = request.identity,
        intent = request.creation_intent,
        platform = context.platform.as_deref().unwrap_or("General"),
        audience = context.audience.as_deref().unwrap_or("General"),
        tone = context.tone.as_deref().unwrap_or("Balanced"),
        complexity = context.language_complexity.as_deref().unwrap_or("Intermediate"),
        length = context.length.as_deref().unwrap_or("Medium"),
        language = language,
        idea = request.raw_idea,
        structure = structure,
    );

    if request.brainstorm_mode {
        prompt.push_str(
            "\nBefore writing, provide:\n\
             \n\
             ## Refinement Notes (max 100 words)\n\
             - Idea strengthening\n\
             - Structure improvement\n\
             - Engagement boost\n\
             - Tone calibration\n\
             - Audience alignment\n\
             \n\
             Then:\n\
             \n\
             ## Balanced Output\n",
        );
    }

    prompt.push_str(
        "\nFormatting:\n\
         - Markdown headings\n\
         - Bold key ideas\n\
         - Clean sections\n",
    );

    prompt
}

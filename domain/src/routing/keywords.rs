//! Keyword tables and per-type claim predicates.
//!
//! Each agent type claims requests through substring matching over the
//! lowercased prompt. The claim regions overlap by design (e.g. "generate
//! an image" satisfies both the content agent's action net and the ai-art
//! agent); residual overlaps are resolved by the orchestrator's scoring
//! step, not here.

use crate::agent::entities::AgentType;

/// Content-domain keywords claimed by the content agent.
pub const CONTENT_KEYWORDS: &[&str] = &[
    "blog",
    "article",
    "marketing",
    "copy",
    "product",
    "description",
    "headline",
    "email",
    "social",
    "seo",
];

/// Action indicators claimed by the content agent. This is a deliberately
/// broad net: the content agent is the generalist fallback.
pub const ACTION_KEYWORDS: &[&str] = &[
    "write",
    "create",
    "generate",
    "improve",
    "rewrite",
    "draft",
    "summarize",
];

/// Layout-domain keywords.
pub const LAYOUT_KEYWORDS: &[&str] = &[
    "layout",
    "design",
    "ui",
    "ux",
    "visual",
    "style",
    "responsive",
    "mobile",
];

/// Image-related keywords claimed by the stock-art agent.
pub const IMAGE_KEYWORDS: &[&str] = &["image", "photo", "picture", "photograph", "stock"];

/// Action keywords that hand image requests to the ai-art agent instead.
pub const ART_ACTION_KEYWORDS: &[&str] = &["generate", "create", "make"];

/// Image keywords the ai-art agent pairs with an action keyword.
pub const ART_IMAGE_KEYWORDS: &[&str] = &["image", "art", "picture", "visual", "artwork"];

/// True if any needle appears as a substring of the (lowercased) haystack.
pub fn contains_any(haystack_lower: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack_lower.contains(needle))
}

/// Whether an agent of the given type claims the prompt.
///
/// `prompt_lower` must already be lowercased.
pub fn claims(agent_type: AgentType, prompt_lower: &str) -> bool {
    match agent_type {
        AgentType::Content => {
            contains_any(prompt_lower, CONTENT_KEYWORDS)
                || contains_any(prompt_lower, ACTION_KEYWORDS)
        }
        AgentType::Layout => contains_any(prompt_lower, LAYOUT_KEYWORDS),
        // "find me a photo" is stock-art; "generate an image" belongs to
        // the ai-art agent, so explicit generation verbs opt out here.
        AgentType::StockArt => {
            contains_any(prompt_lower, IMAGE_KEYWORDS)
                && !prompt_lower.contains("generate")
                && !prompt_lower.contains("create")
        }
        AgentType::AiArt => {
            contains_any(prompt_lower, ART_ACTION_KEYWORDS)
                && contains_any(prompt_lower, ART_IMAGE_KEYWORDS)
        }
    }
}

//! Candidate scoring for agent selection.
//!
//! The formula is fixed: 0.5 base, +0.1 per matching capability tag
//! (uncapped before the final clamp), +0.3 type-specific bonus, +0.1 idle
//! bonus, clamped to 1.0. Ties are left to the caller's stable ordering.

use crate::agent::entities::{AgentStatus, AgentType};

const BASE_SCORE: f64 = 0.5;
const CAPABILITY_BONUS: f64 = 0.1;
const TYPE_BONUS: f64 = 0.3;
const IDLE_BONUS: f64 = 0.1;

/// Score a candidate agent for a prompt.
///
/// `capabilities` are the agent's declared tags (e.g. "blog-posts"); a tag
/// matches when its hyphen-replaced-by-space lowercased form appears as a
/// substring of the lowercased prompt.
pub fn score_candidate(
    agent_type: AgentType,
    capabilities: &[String],
    status: AgentStatus,
    prompt: &str,
) -> f64 {
    let prompt_lower = prompt.to_lowercase();
    let mut score = BASE_SCORE;

    for capability in capabilities {
        let phrase = capability.to_lowercase().replace('-', " ");
        if prompt_lower.contains(&phrase) {
            score += CAPABILITY_BONUS;
        }
    }

    if type_bonus_applies(agent_type, &prompt_lower) {
        score += TYPE_BONUS;
    }

    if status == AgentStatus::Idle {
        score += IDLE_BONUS;
    }

    score.min(1.0)
}

fn type_bonus_applies(agent_type: AgentType, prompt_lower: &str) -> bool {
    match agent_type {
        AgentType::Content => ["write", "content", "text"]
            .iter()
            .any(|k| prompt_lower.contains(k)),
        AgentType::Layout => ["design", "layout", "ui"]
            .iter()
            .any(|k| prompt_lower.contains(k)),
        AgentType::StockArt => ["image", "photo", "picture"]
            .iter()
            .any(|k| prompt_lower.contains(k)),
        AgentType::AiArt => {
            prompt_lower.contains("generate")
                && (prompt_lower.contains("image") || prompt_lower.contains("art"))
        }
    }
}

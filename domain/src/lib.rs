//! Domain layer for contentforge
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Agents
//!
//! An agent is a stateful unit wrapping one generation capability/provider
//! pairing. Each agent declares capability tags, claims requests through a
//! keyword heuristic, and reports a status (`idle`, `processing`, `error`).
//!
//! ## Routing
//!
//! Agent selection is a pure scoring heuristic over the request prompt:
//! a base score, capability-tag bonuses, a type-specific bonus, and an
//! idle bonus, clamped to 1.0. The routing module holds both the per-type
//! claim predicates and the scoring formula.
//!
//! ## Workflows
//!
//! A workflow (in this crate's narrow sense) is an ordered list of agent
//! ids invoked sequentially with prior-step outputs chained into each
//! subsequent prompt.

pub mod agent;
pub mod content;
pub mod core;
pub mod queue;
pub mod routing;

// Re-export commonly used types
pub use agent::{
    config::{AgentConfig, AgentConfigPatch, Provider},
    entities::{AgentSnapshot, AgentStatus, AgentType},
    value_objects::{GenerationRequest, GenerationResponse, RequestContext, TokenUsage},
};
pub use content::analysis::{
    classify_content_type, estimated_reading_time, seo_score, word_count,
};
pub use core::error::DomainError;
pub use queue::entities::{JobStatus, QueueJob};
pub use routing::{keywords, score::score_candidate};

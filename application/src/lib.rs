//! Application layer for contentforge
//!
//! This crate contains the agent abstraction, the four concrete agents,
//! the orchestration use cases, and port definitions. It depends only on
//! the domain layer.

pub mod agents;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use agents::{
    Agent, AgentError,
    ai_art::AiArtAgent,
    content::ContentAgent,
    core::AgentCore,
    layout::LayoutAgent,
    stock_art::StockArtAgent,
};
pub use ports::{
    generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLog},
    job_queue::{JobQueue, QueueError},
    llm_gateway::{ChatMessage, GatewayError, GenerationParams, LlmGateway, ProviderReply},
};
pub use use_cases::{
    orchestrator::{AgentOrchestrator, OrchestratorError},
    queue_worker::QueueWorker,
};

//! Agent contract and the built-in agent pool.
//!
//! Every agent wraps an [`AgentCore`] and implements [`Agent::generate`].
//! The provided [`Agent::process_request`] drives the common lifecycle:
//! capability gate, single-flight guard, status round-trip, timing, and
//! attribution of the response to the agent that produced it.

pub mod ai_art;
pub mod content;
pub mod core;
pub mod layout;
pub mod stock_art;

use crate::ports::llm_gateway::GatewayError;
use async_trait::async_trait;
use forge_domain::{
    AgentSnapshot, AgentStatus, AgentType, GenerationRequest, GenerationResponse,
};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error};

pub use self::ai_art::AiArtAgent;
pub use self::content::ContentAgent;
pub use self::core::AgentCore;
pub use self::layout::LayoutAgent;
pub use self::stock_art::StockArtAgent;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent '{agent}' cannot handle this request")]
    CapabilityMismatch { agent: String },

    #[error("Unsupported AI provider: {0}")]
    UnsupportedProvider(String),

    #[error("generation failed: {0}")]
    GenerationFailed(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[async_trait]
pub trait Agent: Send + Sync {
    fn agent_core(&self) -> &AgentCore;

    /// Whether this agent claims the request. Pure; must not touch
    /// status, configuration, or any external service.
    fn can_handle(&self, _request: &GenerationRequest) -> bool {
        true
    }

    /// Produce content for the request. Implementations return the raw
    /// response; lifecycle bookkeeping belongs to [`process_request`].
    ///
    /// [`process_request`]: Agent::process_request
    async fn generate(&self, request: &GenerationRequest)
        -> Result<GenerationResponse, AgentError>;

    /// Run one generation through the full lifecycle.
    ///
    /// The agent goes `Idle -> Processing -> Idle` on success and ends in
    /// `Error` on failure. The response's `processing_time` and
    /// `agent_used` are always overwritten here, so attribution reflects
    /// the agent that actually ran regardless of what `generate` set.
    async fn process_request(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, AgentError> {
        let core = self.agent_core();

        if !self.can_handle(request) {
            return Err(AgentError::CapabilityMismatch {
                agent: core.id().to_string(),
            });
        }

        let _flight = core.flight_guard().await;
        core.set_status(AgentStatus::Processing);
        debug!(agent = %core.id(), "processing generation request");

        let started = Instant::now();
        match self.generate(request).await {
            Ok(mut response) => {
                response.processing_time = started.elapsed().as_secs_f64();
                response.agent_used = core.id().to_string();
                core.set_status(AgentStatus::Idle);
                debug!(
                    agent = %core.id(),
                    elapsed_secs = response.processing_time,
                    "generation complete"
                );
                Ok(response)
            }
            Err(err) => {
                core.set_status(AgentStatus::Error);
                error!(agent = %core.id(), error = %err, "generation failed");
                Err(err)
            }
        }
    }

    fn id(&self) -> &str {
        self.agent_core().id()
    }

    fn name(&self) -> &str {
        self.agent_core().name()
    }

    fn agent_type(&self) -> AgentType {
        self.agent_core().agent_type()
    }

    fn status(&self) -> AgentStatus {
        self.agent_core().status()
    }

    fn snapshot(&self) -> AgentSnapshot {
        self.agent_core().snapshot()
    }
}

//! Stock image search agent. Placeholder implementation.

use crate::agents::{Agent, AgentCore, AgentError};
use async_trait::async_trait;
use forge_domain::{AgentConfig, AgentType, GenerationRequest, GenerationResponse, keywords};
use serde_json::json;

pub const STOCK_ART_AGENT_ID: &str = "stock-art-agent";

/// Claims image-search prompts that are not explicit generation requests.
/// No stock provider is wired up yet; responses describe the search that
/// would run.
pub struct StockArtAgent {
    core: AgentCore,
}

impl Default for StockArtAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl StockArtAgent {
    pub fn new() -> Self {
        Self {
            core: AgentCore::new(
                STOCK_ART_AGENT_ID,
                "Stock Art Agent",
                AgentType::StockArt,
                vec!["image-search", "stock-photos"],
                AgentConfig::with_system_prompt(
                    "You find relevant stock photography for web content.",
                ),
            ),
        }
    }
}

#[async_trait]
impl Agent for StockArtAgent {
    fn agent_core(&self) -> &AgentCore {
        &self.core
    }

    fn can_handle(&self, request: &GenerationRequest) -> bool {
        keywords::claims(AgentType::StockArt, &request.prompt_lower())
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, AgentError> {
        let content = format!(
            "Stock image search for: {}\n\nSuggested search terms and a shortlist of \
             matching stock photos would appear here.",
            request.prompt
        );
        Ok(GenerationResponse::new(content, 0.95).with_metadata("placeholder", json!(true)))
    }
}

//! Layout suggestion agent. Placeholder implementation.

use crate::agents::{Agent, AgentCore, AgentError};
use async_trait::async_trait;
use forge_domain::{AgentConfig, AgentType, GenerationRequest, GenerationResponse, keywords};
use serde_json::json;

pub const LAYOUT_AGENT_ID: &str = "layout-agent";

/// Claims layout and design prompts. Generation currently returns a
/// canned description instead of a real block arrangement.
pub struct LayoutAgent {
    core: AgentCore,
}

impl Default for LayoutAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutAgent {
    pub fn new() -> Self {
        Self {
            core: AgentCore::new(
                LAYOUT_AGENT_ID,
                "Layout Agent",
                AgentType::Layout,
                vec!["page-layouts", "block-arrangement", "responsive-design"],
                AgentConfig::with_system_prompt(
                    "You are a web layout specialist. Suggest clear, accessible page structures.",
                ),
            ),
        }
    }
}

#[async_trait]
impl Agent for LayoutAgent {
    fn agent_core(&self) -> &AgentCore {
        &self.core
    }

    fn can_handle(&self, request: &GenerationRequest) -> bool {
        keywords::claims(AgentType::Layout, &request.prompt_lower())
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, AgentError> {
        let content = format!(
            "Layout suggestion for: {}\n\nA single-column hero section followed by a \
             two-column content grid, collapsing to one column on narrow viewports.",
            request.prompt
        );
        Ok(GenerationResponse::new(content, 0.95).with_metadata("placeholder", json!(true)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_domain::AgentStatus;

    #[tokio::test]
    async fn test_placeholder_response() {
        let agent = LayoutAgent::new();
        let request = GenerationRequest::new("design a responsive landing page layout", "wf-1");
        assert!(agent.can_handle(&request));

        let response = agent.process_request(&request).await.unwrap();
        assert_eq!(response.agent_used, LAYOUT_AGENT_ID);
        assert_eq!(response.metadata["placeholder"], json!(true));
        assert!((response.confidence_score - 0.95).abs() < f64::EPSILON);
        assert_eq!(agent.status(), AgentStatus::Idle);
    }

    #[test]
    fn test_declines_non_layout_prompts() {
        let agent = LayoutAgent::new();
        assert!(!agent.can_handle(&GenerationRequest::new("write a blog post", "wf-1")));
    }
}

//! Image generation agent. Placeholder implementation.

use crate::agents::{Agent, AgentCore, AgentError};
use async_trait::async_trait;
use forge_domain::{AgentConfig, AgentType, GenerationRequest, GenerationResponse, keywords};
use serde_json::json;

pub const AI_ART_AGENT_ID: &str = "ai-art-agent";

/// Claims prompts that pair a generation verb with an image noun. No
/// image model is wired up yet; responses describe the image that would
/// be generated.
pub struct AiArtAgent {
    core: AgentCore,
}

impl Default for AiArtAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl AiArtAgent {
    pub fn new() -> Self {
        Self {
            core: AgentCore::new(
                AI_ART_AGENT_ID,
                "AI Art Agent",
                AgentType::AiArt,
                vec!["image-generation", "ai-art", "custom-graphics"],
                AgentConfig::with_system_prompt(
                    "You create custom graphics and AI-generated imagery for web content.",
                ),
            ),
        }
    }
}

#[async_trait]
impl Agent for AiArtAgent {
    fn agent_core(&self) -> &AgentCore {
        &self.core
    }

    fn can_handle(&self, request: &GenerationRequest) -> bool {
        keywords::claims(AgentType::AiArt, &request.prompt_lower())
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, AgentError> {
        let content = format!(
            "AI art generation for: {}\n\nA generated image matching this description \
             would be attached here.",
            request.prompt
        );
        Ok(GenerationResponse::new(content, 0.95).with_metadata("placeholder", json!(true)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_placeholder_response() {
        let agent = AiArtAgent::new();
        let request = GenerationRequest::new("generate an image of a mountain", "wf-1");
        assert!(agent.can_handle(&request));

        let response = agent.process_request(&request).await.unwrap();
        assert_eq!(response.agent_used, AI_ART_AGENT_ID);
        assert_eq!(response.metadata["placeholder"], json!(true));
    }

    #[test]
    fn test_requires_action_and_image_words() {
        let agent = AiArtAgent::new();
        assert!(!agent.can_handle(&GenerationRequest::new("a mountain photograph", "wf-1")));
        assert!(!agent.can_handle(&GenerationRequest::new("generate a summary", "wf-1")));
    }
}

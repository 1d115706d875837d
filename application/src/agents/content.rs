//! Text-generation agent backed by a real LLM provider.

use crate::agents::{Agent, AgentCore, AgentError};
use crate::ports::llm_gateway::{ChatMessage, GenerationParams, LlmGateway};
use async_trait::async_trait;
use forge_domain::{
    AgentConfig, AgentType, GenerationRequest, GenerationResponse, Provider,
    classify_content_type, estimated_reading_time, keywords, seo_score, word_count,
};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub const CONTENT_AGENT_ID: &str = "content-agent";

const DEFAULT_SYSTEM_PROMPT: &str = "You are a professional content writer specializing in \
    engaging, SEO-optimized content for websites. Write clear, well-structured text tailored \
    to the requested format.";

const CONTENT_CONFIDENCE: f64 = 0.85;

/// The generalist writer. Claims any prompt that mentions a content form
/// or a writing action, and is the usual fallback for plain prose.
pub struct ContentAgent {
    core: AgentCore,
    gateway: Arc<dyn LlmGateway>,
}

impl ContentAgent {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self::with_config(
            gateway,
            AgentConfig::with_system_prompt(DEFAULT_SYSTEM_PROMPT),
        )
    }

    pub fn with_config(gateway: Arc<dyn LlmGateway>, config: AgentConfig) -> Self {
        Self {
            core: AgentCore::new(
                CONTENT_AGENT_ID,
                "Content Agent",
                AgentType::Content,
                vec![
                    "blog-posts",
                    "product-descriptions",
                    "marketing-copy",
                    "seo-content",
                ],
                config,
            ),
            gateway,
        }
    }

    /// Fold the request context into the system prompt so the provider
    /// sees selected text and knowledge-base hints without the caller's
    /// prompt being rewritten.
    fn system_prompt(&self, request: &GenerationRequest) -> String {
        let mut prompt = self.core.config().system_prompt;
        if let Some(selected) = request.selected_content() {
            prompt.push_str(&format!(
                "\n\nThe user is improving existing content: {selected}"
            ));
        }
        if let Some(ids) = request.knowledge_base_ids.as_deref()
            && !ids.is_empty()
        {
            prompt.push_str(&format!(
                "\n\nDraw on the following knowledge bases where relevant: {}",
                ids.join(", ")
            ));
        }
        prompt
    }
}

#[async_trait]
impl Agent for ContentAgent {
    fn agent_core(&self) -> &AgentCore {
        &self.core
    }

    fn can_handle(&self, request: &GenerationRequest) -> bool {
        keywords::claims(AgentType::Content, &request.prompt_lower())
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, AgentError> {
        let config = self.core.config();

        if config.provider == Provider::Google {
            return Err(AgentError::UnsupportedProvider("google".into()));
        }

        let params = GenerationParams {
            model: config.model.clone(),
            messages: vec![
                ChatMessage::system(self.system_prompt(request)),
                ChatMessage::user(&request.prompt),
            ],
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        };

        debug!(provider = %config.provider, model = %config.model, "dispatching to provider");
        let reply = self.gateway.generate(config.provider, params).await?;

        let content_type = classify_content_type(&request.prompt);
        let words = word_count(&reply.content);
        let response = GenerationResponse::new(reply.content.clone(), CONTENT_CONFIDENCE)
            .with_usage(reply.usage)
            .with_metadata("content_type", json!(content_type))
            .with_metadata("word_count", json!(words))
            .with_metadata("estimated_reading_time", json!(estimated_reading_time(words)))
            .with_metadata(
                "seo_score",
                json!(seo_score(&request.prompt, &reply.content)),
            )
            .with_metadata("provider", json!(config.provider.as_str()))
            .with_metadata("model", json!(reply.model));
        Ok(response)
    }
}

//! LLM Gateway port
//!
//! Defines the interface for communicating with LLM providers.

use async_trait::async_trait;
use forge_domain::{Provider, TokenUsage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("No provider adapter registered for {0}")]
    ProviderNotConfigured(String),

    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// One chat turn in the provider-neutral message format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Parameters for a single generation call.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// What a provider returns for one generation call.
#[derive(Debug, Clone)]
pub struct ProviderReply {
    pub content: String,
    /// The model that actually served the request.
    pub model: String,
    pub usage: TokenUsage,
}

/// Gateway for LLM communication
///
/// This port defines how agents reach generation backends. Implementations
/// (adapters) live in the infrastructure layer and route by provider.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Run one generation against the given provider.
    async fn generate(
        &self,
        provider: Provider,
        params: GenerationParams,
    ) -> Result<ProviderReply, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let system = ChatMessage::system("You write content.");
        assert_eq!(system.role, "system");
        let user = ChatMessage::user("write a post");
        assert_eq!(user.role, "user");
        assert_eq!(user.content, "write a post");
    }
}

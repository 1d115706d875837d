//! Anthropic messages adapter.

use super::{ProviderAdapter, map_transport_error};
use crate::config::AnthropicSettings;
use async_trait::async_trait;
use forge_application::ports::llm_gateway::{GatewayError, GenerationParams, ProviderReply};
use forge_domain::{Provider, TokenUsage};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub struct AnthropicAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    api_version: String,
}

#[derive(Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<TurnMessage>,
}

#[derive(Serialize)]
struct TurnMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    model: String,
    content: Vec<ContentBlock>,
    usage: ApiUsage,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: String,
}

#[derive(Deserialize)]
struct ApiUsage {
    input_tokens: u32,
    output_tokens: u32,
}

impl AnthropicAdapter {
    pub fn new(settings: &AnthropicSettings) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(settings.timeout_secs))
                .build()
                .unwrap_or_default(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.resolve_api_key(),
            api_version: settings.api_version.clone(),
        }
    }
}

#[async_trait]
impl ProviderAdapter for AnthropicAdapter {
    fn provider(&self) -> Provider {
        Provider::Anthropic
    }

    async fn generate(&self, params: GenerationParams) -> Result<ProviderReply, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GatewayError::MissingApiKey("anthropic".to_string()))?;

        // The messages API takes the system prompt as a top-level field,
        // not as a message turn.
        let mut system: Option<String> = None;
        let mut messages = Vec::new();
        for message in params.messages {
            if message.role == "system" {
                system = Some(match system {
                    Some(existing) => format!("{existing}\n\n{}", message.content),
                    None => message.content,
                });
            } else {
                messages.push(TurnMessage {
                    role: message.role,
                    content: message.content,
                });
            }
        }

        let body = MessagesRequest {
            model: params.model,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            system,
            messages,
        };

        debug!(model = %body.model, "calling anthropic messages");
        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.api_version)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "anthropic returned {status}: {detail}"
            )));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        let text = parsed
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| {
                GatewayError::MalformedResponse("no content blocks in response".to_string())
            })?;

        Ok(ProviderReply {
            content: text,
            model: parsed.model,
            usage: TokenUsage::new(parsed.usage.input_tokens, parsed.usage.output_tokens),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_application::ports::llm_gateway::ChatMessage;

    #[tokio::test]
    async fn test_missing_api_key() {
        let settings = AnthropicSettings {
            api_key: None,
            api_key_env: "CONTENTFORGE_TEST_NO_SUCH_KEY".to_string(),
            ..Default::default()
        };
        let adapter = AnthropicAdapter::new(&settings);

        let params = GenerationParams {
            model: "claude-3-5-sonnet-20241022".to_string(),
            messages: vec![ChatMessage::user("hi")],
            temperature: 0.7,
            max_tokens: 100,
        };
        let err = adapter.generate(params).await.unwrap_err();
        assert!(matches!(err, GatewayError::MissingApiKey(_)));
    }

    #[test]
    fn test_system_turn_lifted_to_top_level_field() {
        // Mirrors the request-building logic for system messages.
        let messages = [ChatMessage::system("be terse"), ChatMessage::user("hi")];
        let system: Vec<_> = messages.iter().filter(|m| m.role == "system").collect();
        assert_eq!(system.len(), 1);
    }

    #[test]
    fn test_response_parsing() {
        let parsed: MessagesResponse = serde_json::from_str(
            r#"{
                "model": "claude-3-5-sonnet-20241022",
                "content": [{"type": "text", "text": "Hello"}],
                "usage": {"input_tokens": 8, "output_tokens": 4}
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.content[0].text, "Hello");
        assert_eq!(parsed.usage.output_tokens, 4);
    }
}

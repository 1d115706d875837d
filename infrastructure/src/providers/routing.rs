//! Provider routing gateway.

use super::ProviderAdapter;
use crate::config::file_config::ProvidersConfig;
use async_trait::async_trait;
use forge_application::ports::llm_gateway::{
    GatewayError, GenerationParams, LlmGateway, ProviderReply,
};
use forge_domain::Provider;
use std::sync::Arc;

/// Gateway implementation that routes each request to the adapter for
/// its provider.
///
/// Only providers with a registered adapter can serve requests; anything
/// else fails with `ProviderNotConfigured` before any network I/O.
pub struct HttpLlmGateway {
    adapters: Vec<Arc<dyn ProviderAdapter>>,
}

impl HttpLlmGateway {
    pub fn new(adapters: Vec<Arc<dyn ProviderAdapter>>) -> Self {
        Self { adapters }
    }

    /// Build the gateway with the standard adapter set from provider
    /// settings.
    pub fn from_config(config: &ProvidersConfig) -> Self {
        Self::new(vec![
            Arc::new(super::OpenAiAdapter::new(&config.openai)),
            Arc::new(super::AnthropicAdapter::new(&config.anthropic)),
        ])
    }

    fn adapter(&self, provider: Provider) -> Option<&Arc<dyn ProviderAdapter>> {
        self.adapters.iter().find(|a| a.provider() == provider)
    }
}

#[async_trait]
impl LlmGateway for HttpLlmGateway {
    async fn generate(
        &self,
        provider: Provider,
        params: GenerationParams,
    ) -> Result<ProviderReply, GatewayError> {
        match self.adapter(provider) {
            Some(adapter) => adapter.generate(params).await,
            None => Err(GatewayError::ProviderNotConfigured(
                provider.as_str().to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_application::ports::llm_gateway::ChatMessage;

    fn params() -> GenerationParams {
        GenerationParams {
            model: "gpt-4".to_string(),
            messages: vec![ChatMessage::user("hi")],
            temperature: 0.7,
            max_tokens: 100,
        }
    }

    #[tokio::test]
    async fn test_unregistered_provider_rejected_without_io() {
        let gateway = HttpLlmGateway::new(vec![]);
        let err = gateway.generate(Provider::Google, params()).await.unwrap_err();
        assert!(matches!(err, GatewayError::ProviderNotConfigured(p) if p == "google"));
    }

    #[tokio::test]
    async fn test_standard_set_has_no_google_adapter() {
        let gateway = HttpLlmGateway::from_config(&ProvidersConfig::default());
        let err = gateway.generate(Provider::Google, params()).await.unwrap_err();
        assert!(matches!(err, GatewayError::ProviderNotConfigured(_)));
    }
}

//! LLM provider adapters.
//!
//! One adapter per provider, each speaking its native HTTP API, unified
//! behind [`HttpLlmGateway`] which implements the gateway port and routes
//! by provider.

pub mod anthropic;
pub mod openai;
pub mod routing;

use async_trait::async_trait;
use forge_application::ports::llm_gateway::{GatewayError, GenerationParams, ProviderReply};
use forge_domain::Provider;

pub use anthropic::AnthropicAdapter;
pub use openai::OpenAiAdapter;
pub use routing::HttpLlmGateway;

/// A single provider backend.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn provider(&self) -> Provider;

    async fn generate(&self, params: GenerationParams) -> Result<ProviderReply, GatewayError>;
}

/// Translate reqwest failures into gateway errors.
pub(crate) fn map_transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else if err.is_connect() {
        GatewayError::ConnectionError(err.to_string())
    } else {
        GatewayError::RequestFailed(err.to_string())
    }
}

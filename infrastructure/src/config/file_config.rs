//! Configuration file format.
//!
//! Maps to `contentforge.toml` / `config.toml`:
//!
//! ```toml
//! [providers.openai]
//! api_key_env = "OPENAI_API_KEY"
//! base_url = "https://api.openai.com"
//!
//! [providers.anthropic]
//! api_key_env = "ANTHROPIC_API_KEY"
//!
//! [agents.content-agent]
//! provider = "anthropic"
//! model = "claude-3-5-sonnet-20241022"
//!
//! [logging]
//! generation_log = "contentforge.generation.jsonl"
//! ```

use forge_domain::AgentConfigPatch;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub providers: ProvidersConfig,
    /// Per-agent configuration overrides, keyed by agent id. Applied as
    /// shallow merges over each agent's defaults at startup.
    pub agents: HashMap<String, AgentConfigPatch>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub openai: OpenAiSettings,
    pub anthropic: AnthropicSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiSettings {
    /// Inline API key. Prefer `api_key_env`; this exists for setups where
    /// the config file is already secret-managed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub api_key_env: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
            base_url: "https://api.openai.com".to_string(),
            timeout_secs: 60,
        }
    }
}

impl OpenAiSettings {
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnthropicSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub api_key_env: String,
    pub base_url: String,
    pub api_version: String,
    pub timeout_secs: u64,
}

impl Default for AnthropicSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
            timeout_secs: 60,
        }
    }
}

impl AnthropicSettings {
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Where to write the JSONL generation event log. Disabled when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_log: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_domain::Provider;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.providers.openai.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.providers.anthropic.api_version, "2023-06-01");
        assert!(config.agents.is_empty());
        assert!(config.logging.generation_log.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config: FileConfig = toml::from_str(
            r#"
            [providers.openai]
            base_url = "http://localhost:8080"

            [providers.anthropic]
            api_key = "sk-ant-test"

            [agents.content-agent]
            provider = "anthropic"
            model = "claude-3-5-sonnet-20241022"
            temperature = 0.3

            [logging]
            generation_log = "gen.jsonl"
            "#,
        )
        .unwrap();

        assert_eq!(config.providers.openai.base_url, "http://localhost:8080");
        assert_eq!(
            config.providers.anthropic.api_key.as_deref(),
            Some("sk-ant-test")
        );

        let patch = &config.agents["content-agent"];
        assert_eq!(patch.provider, Some(Provider::Anthropic));
        assert_eq!(patch.model.as_deref(), Some("claude-3-5-sonnet-20241022"));
        assert_eq!(patch.temperature, Some(0.3));
        assert!(patch.system_prompt.is_none());

        assert_eq!(
            config.logging.generation_log,
            Some(PathBuf::from("gen.jsonl"))
        );
    }

    #[test]
    fn test_inline_key_wins_over_env() {
        let settings = OpenAiSettings {
            api_key: Some("sk-inline".to_string()),
            ..Default::default()
        };
        assert_eq!(settings.resolve_api_key().as_deref(), Some("sk-inline"));
    }
}

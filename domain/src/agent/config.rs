//! Agent configuration value objects.
//!
//! [`AgentConfig`] is owned exclusively by its agent and mutated only via
//! an explicit [`AgentConfigPatch`] merge: provided fields overwrite,
//! absent fields are untouched, and no value validation happens during the
//! merge. Presence validation is a separate, non-throwing check.

use serde::{Deserialize, Serialize};

/// LLM provider backing an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Anthropic,
    Google,
}

impl Provider {
    pub fn as_str(&self) -> &str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Google => "google",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(Provider::OpenAi),
            "anthropic" => Ok(Provider::Anthropic),
            "google" => Ok(Provider::Google),
            other => Err(format!("unknown provider: {other}")),
        }
    }
}

/// Generation settings for a single agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub provider: Provider,
    pub model: String,
    /// Sampling temperature, 0.0–2.0.
    pub temperature: f32,
    pub max_tokens: u32,
    pub system_prompt: String,
    /// Per-agent API key override. Never exposed through snapshots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            provider: Provider::OpenAi,
            model: "gpt-4".to_string(),
            temperature: 0.7,
            max_tokens: 1500,
            system_prompt: String::new(),
            api_key: None,
        }
    }
}

impl AgentConfig {
    /// Create the shared default configuration with an agent-specific
    /// system prompt.
    pub fn with_system_prompt(prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: prompt.into(),
            ..Self::default()
        }
    }

    /// Shallow-merge the patch into this config.
    ///
    /// Returns the names of the fields that were provided, for logging.
    /// Values are not validated here.
    pub fn apply(&mut self, patch: &AgentConfigPatch) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if let Some(provider) = patch.provider {
            self.provider = provider;
            changed.push("provider");
        }
        if let Some(model) = &patch.model {
            self.model = model.clone();
            changed.push("model");
        }
        if let Some(temperature) = patch.temperature {
            self.temperature = temperature;
            changed.push("temperature");
        }
        if let Some(max_tokens) = patch.max_tokens {
            self.max_tokens = max_tokens;
            changed.push("max_tokens");
        }
        if let Some(system_prompt) = &patch.system_prompt {
            self.system_prompt = system_prompt.clone();
            changed.push("system_prompt");
        }
        if let Some(api_key) = &patch.api_key {
            self.api_key = Some(api_key.clone());
            changed.push("api_key");
        }
        changed
    }

    /// Required fields that are missing or empty.
    ///
    /// The provider is an enum and therefore always present; model and
    /// system prompt may be blank after a careless patch.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.model.trim().is_empty() {
            missing.push("model");
        }
        if self.system_prompt.trim().is_empty() {
            missing.push("system_prompt");
        }
        missing
    }
}

/// Partial configuration for shallow merges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfigPatch {
    pub provider: Option<Provider>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub system_prompt: Option<String>,
    pub api_key: Option<String>,
}

impl AgentConfigPatch {
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

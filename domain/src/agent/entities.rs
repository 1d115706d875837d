//! Agent domain entities

use super::config::Provider;
use serde::{Deserialize, Serialize};

/// Operational status of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    /// Agent is available for requests
    #[default]
    Idle,
    /// Agent is currently generating
    Processing,
    /// Agent's last generation failed; excluded from selection until reset
    Error,
}

impl AgentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AgentStatus::Idle => "idle",
            AgentStatus::Processing => "processing",
            AgentStatus::Error => "error",
        }
    }

    /// Errored agents are filtered out of the candidate pool.
    pub fn is_selectable(&self) -> bool {
        !matches!(self, AgentStatus::Error)
    }
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The generation domain an agent specialises in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentType {
    /// Text content generation (the generalist fallback)
    Content,
    /// Page layout and design suggestions
    Layout,
    /// Stock image search
    StockArt,
    /// AI image generation
    AiArt,
}

impl AgentType {
    pub fn as_str(&self) -> &str {
        match self {
            AgentType::Content => "content",
            AgentType::Layout => "layout",
            AgentType::StockArt => "stock-art",
            AgentType::AiArt => "ai-art",
        }
    }
}

impl std::fmt::Display for AgentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AgentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "content" => Ok(AgentType::Content),
            "layout" => Ok(AgentType::Layout),
            "stock-art" => Ok(AgentType::StockArt),
            "ai-art" => Ok(AgentType::AiArt),
            other => Err(format!("unknown agent type: {other}")),
        }
    }
}

/// Read-only view of an agent's observable state.
///
/// Exposes only the provider and model from the agent's configuration.
/// API keys and other secrets are never part of a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    pub status: AgentStatus,
    pub capabilities: Vec<String>,
    pub provider: Provider,
    pub model: String,
}

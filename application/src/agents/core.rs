//! Shared agent state.
//!
//! [`AgentCore`] holds everything common to the concrete agents: identity,
//! capability tags, the status cell, the configuration cell, and the
//! per-agent single-flight guard. Concrete agents compose a core rather
//! than inheriting from a base class.

use forge_domain::{AgentConfig, AgentConfigPatch, AgentSnapshot, AgentStatus, AgentType};
use std::sync::RwLock;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{info, warn};

pub struct AgentCore {
    id: String,
    name: String,
    agent_type: AgentType,
    /// Ordered capability tags, used by the orchestrator's scoring step.
    capabilities: Vec<String>,
    status: RwLock<AgentStatus>,
    config: RwLock<AgentConfig>,
    /// Serializes generation per agent. Status is observational; this
    /// guard is what actually prevents overlapping `generate` calls.
    flight: Mutex<()>,
}

impl AgentCore {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        agent_type: AgentType,
        capabilities: Vec<&str>,
        config: AgentConfig,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            agent_type,
            capabilities: capabilities.into_iter().map(String::from).collect(),
            status: RwLock::new(AgentStatus::Idle),
            config: RwLock::new(config),
            flight: Mutex::new(()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn agent_type(&self) -> AgentType {
        self.agent_type
    }

    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }

    pub fn status(&self) -> AgentStatus {
        *self.status.read().expect("agent status lock poisoned")
    }

    pub(crate) fn set_status(&self, status: AgentStatus) {
        *self.status.write().expect("agent status lock poisoned") = status;
    }

    /// Return the agent to `Idle` after an error. Administrative; nothing
    /// recovers an errored agent automatically.
    pub fn reset(&self) {
        info!(agent = %self.id, "agent status reset to idle");
        self.set_status(AgentStatus::Idle);
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> AgentConfig {
        self.config.read().expect("agent config lock poisoned").clone()
    }

    /// Shallow-merge a partial configuration. Values are not validated;
    /// the names of the provided fields are logged for observability.
    pub fn update_config(&self, patch: &AgentConfigPatch) {
        let changed = self
            .config
            .write()
            .expect("agent config lock poisoned")
            .apply(patch);
        info!(agent = %self.id, fields = ?changed, "agent config updated");
    }

    /// Check that required config fields are present. Missing fields are
    /// warned about; this never fails the agent.
    pub fn validate_config(&self) -> bool {
        let missing = self.config().missing_fields();
        if missing.is_empty() {
            true
        } else {
            warn!(agent = %self.id, fields = ?missing, "agent config missing required fields");
            false
        }
    }

    /// Read-only view of the agent's observable state. Exposes only the
    /// provider and model from the config; secrets stay inside.
    pub fn snapshot(&self) -> AgentSnapshot {
        let config = self.config();
        AgentSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            agent_type: self.agent_type,
            status: self.status(),
            capabilities: self.capabilities.clone(),
            provider: config.provider,
            model: config.model,
        }
    }

    /// Acquire the single-flight guard for the duration of one generation.
    pub async fn flight_guard(&self) -> MutexGuard<'_, ()> {
        self.flight.lock().await
    }
}

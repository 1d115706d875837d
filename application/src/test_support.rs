//! Shared test doubles for agent and orchestration tests.

use crate::agents::{Agent, AgentCore, AgentError};
use crate::ports::job_queue::{JobQueue, QueueError};
use crate::ports::llm_gateway::{GatewayError, GenerationParams, LlmGateway, ProviderReply};
use async_trait::async_trait;
use forge_domain::{
    AgentConfig, AgentType, GenerationRequest, GenerationResponse, JobStatus, Provider, QueueJob,
    TokenUsage, keywords,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scriptable agent used across orchestrator and worker tests.
pub(crate) struct ScriptedAgent {
    core: AgentCore,
    pub fail: bool,
    pub delay: Option<Duration>,
    pub calls: AtomicUsize,
    pub seen_prompts: Mutex<Vec<String>>,
}

impl ScriptedAgent {
    pub fn new(id: &str, agent_type: AgentType, capabilities: Vec<&str>) -> Self {
        Self {
            core: AgentCore::new(id, id, agent_type, capabilities, AgentConfig::default()),
            fail: false,
            delay: None,
            calls: AtomicUsize::new(0),
            seen_prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(id: &str, agent_type: AgentType) -> Self {
        let mut agent = Self::new(id, agent_type, vec![]);
        agent.fail = true;
        agent
    }
}

#[async_trait]
impl Agent for ScriptedAgent {
    fn agent_core(&self) -> &AgentCore {
        &self.core
    }

    // Claims by type like the real agents, so selection tests exercise
    // the same claim gate.
    fn can_handle(&self, request: &GenerationRequest) -> bool {
        keywords::claims(self.core.agent_type(), &request.prompt_lower())
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_prompts
            .lock()
            .unwrap()
            .push(request.prompt.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(AgentError::GenerationFailed("scripted failure".into()));
        }
        Ok(GenerationResponse::new(
            format!("output for: {}", request.prompt),
            0.9,
        ))
    }
}

/// Gateway double returning a fixed reply for any provider.
pub(crate) struct FixedReplyGateway {
    pub reply: String,
}

impl FixedReplyGateway {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
        })
    }
}

#[async_trait]
impl LlmGateway for FixedReplyGateway {
    async fn generate(
        &self,
        _provider: Provider,
        _params: GenerationParams,
    ) -> Result<ProviderReply, GatewayError> {
        Ok(ProviderReply {
            content: self.reply.clone(),
            model: "test-model".to_string(),
            usage: TokenUsage::new(10, 20),
        })
    }
}

/// Minimal in-memory queue for orchestration tests.
pub(crate) struct TestQueue {
    jobs: Mutex<Vec<QueueJob>>,
}

impl TestQueue {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            jobs: Mutex::new(Vec::new()),
        })
    }

    pub fn len(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }
}

#[async_trait]
impl JobQueue for TestQueue {
    async fn add_job(&self, job: QueueJob) -> Result<(), QueueError> {
        self.jobs.lock().unwrap().push(job);
        Ok(())
    }

    async fn next_pending(&self) -> Result<Option<QueueJob>, QueueError> {
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs
            .iter()
            .find(|job| job.status == JobStatus::Pending)
            .cloned())
    }

    async fn update(&self, job: QueueJob) -> Result<(), QueueError> {
        let mut jobs = self.jobs.lock().unwrap();
        match jobs.iter_mut().find(|j| j.id == job.id) {
            Some(slot) => {
                *slot = job;
                Ok(())
            }
            None => Err(QueueError::UnknownJob(job.id)),
        }
    }

    async fn job(&self, id: &str) -> Result<Option<QueueJob>, QueueError> {
        Ok(self.jobs.lock().unwrap().iter().find(|j| j.id == id).cloned())
    }
}

//! Agent orchestration.
//!
//! The orchestrator owns the agent pool and routes requests to the best
//! candidate through a two-phase selection: cheap claim predicates narrow
//! the pool, then a scoring pass ranks the remaining candidates. It also
//! drives multi-agent workflows and the asynchronous queue path.

use crate::agents::{Agent, AgentError, AiArtAgent, ContentAgent, LayoutAgent, StockArtAgent};
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLog};
use crate::ports::job_queue::{JobQueue, QueueError};
use crate::ports::llm_gateway::LlmGateway;
use forge_domain::{
    AgentConfigPatch, AgentSnapshot, GenerationRequest, GenerationResponse, QueueJob,
    score_candidate,
};
use serde_json::json;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("no suitable agent found for this request")]
    NoSuitableAgent,

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error("operation cancelled")]
    Cancelled,
}

/// Routes generation requests to a pool of agents.
pub struct AgentOrchestrator {
    /// Registration order is meaningful: score ties go to the earlier
    /// registration.
    agents: RwLock<Vec<Arc<dyn Agent>>>,
    queue: Arc<dyn JobQueue>,
    logger: Arc<dyn GenerationLogger>,
    cancellation: Option<CancellationToken>,
}

impl AgentOrchestrator {
    /// Build an orchestrator with the default agent pool: content,
    /// layout, stock-art, and ai-art, registered in that order.
    pub fn new(gateway: Arc<dyn LlmGateway>, queue: Arc<dyn JobQueue>) -> Self {
        let agents: Vec<Arc<dyn Agent>> = vec![
            Arc::new(ContentAgent::new(gateway)),
            Arc::new(LayoutAgent::new()),
            Arc::new(StockArtAgent::new()),
            Arc::new(AiArtAgent::new()),
        ];
        Self::with_pool(agents, queue)
    }

    /// Build an orchestrator over an explicit agent pool.
    pub fn with_pool(agents: Vec<Arc<dyn Agent>>, queue: Arc<dyn JobQueue>) -> Self {
        Self {
            agents: RwLock::new(agents),
            queue,
            logger: Arc::new(NoGenerationLog),
            cancellation: None,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    fn check_cancelled(&self) -> Result<(), OrchestratorError> {
        match &self.cancellation {
            Some(token) if token.is_cancelled() => Err(OrchestratorError::Cancelled),
            _ => Ok(()),
        }
    }

    fn pool(&self) -> Vec<Arc<dyn Agent>> {
        self.agents.read().expect("agent pool lock poisoned").clone()
    }

    /// Pick the best agent for a request, or `None` when no agent claims
    /// it.
    ///
    /// Selectable agents (not in error) that claim the request are scored
    /// and ranked; a stable sort keeps registration order for equal
    /// scores. A lone candidate skips scoring entirely.
    pub fn select_best_agent(&self, request: &GenerationRequest) -> Option<Arc<dyn Agent>> {
        let candidates: Vec<Arc<dyn Agent>> = self
            .pool()
            .into_iter()
            .filter(|agent| agent.status().is_selectable() && agent.can_handle(request))
            .collect();

        match candidates.len() {
            0 => None,
            1 => {
                let agent = candidates.into_iter().next()?;
                debug!(agent = %agent.id(), "single candidate, selected directly");
                Some(agent)
            }
            _ => {
                let mut scored: Vec<(f64, Arc<dyn Agent>)> = candidates
                    .into_iter()
                    .map(|agent| {
                        let score = score_candidate(
                            agent.agent_type(),
                            agent.agent_core().capabilities(),
                            agent.status(),
                            &request.prompt,
                        );
                        debug!(agent = %agent.id(), score, "scored candidate");
                        (score, agent)
                    })
                    .collect();
                // Stable sort: equal scores keep registration order.
                scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
                scored.into_iter().next().map(|(_, agent)| agent)
            }
        }
    }

    /// Route a request to the best agent and run it synchronously.
    pub async fn process_request(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, OrchestratorError> {
        self.check_cancelled()?;

        let agent = self
            .select_best_agent(request)
            .ok_or(OrchestratorError::NoSuitableAgent)?;
        info!(agent = %agent.id(), workflow = %request.workflow_id, "agent selected");
        self.logger.log(GenerationEvent::new(
            "agent_selected",
            json!({ "agent": agent.id(), "workflow_id": request.workflow_id }),
        ));

        match agent.process_request(request).await {
            Ok(response) => {
                self.logger.log(GenerationEvent::new(
                    "generation_completed",
                    json!({
                        "agent": response.agent_used,
                        "processing_time": response.processing_time,
                        "confidence": response.confidence_score,
                    }),
                ));
                Ok(response)
            }
            Err(err) => {
                self.logger.log(GenerationEvent::new(
                    "generation_failed",
                    json!({ "agent": agent.id(), "error": err.to_string() }),
                ));
                Err(err.into())
            }
        }
    }

    /// Enqueue a request for background processing and return the job id
    /// immediately.
    pub async fn process_request_async(
        &self,
        request: GenerationRequest,
    ) -> Result<String, OrchestratorError> {
        self.check_cancelled()?;

        let job = QueueJob::generation(request);
        let id = job.id.clone();
        self.queue.add_job(job).await?;
        info!(job = %id, "generation job queued");
        self.logger
            .log(GenerationEvent::new("job_queued", json!({ "job_id": id })));
        Ok(id)
    }

    /// Run a sequence of agents over one request, feeding each step a
    /// summary of the previous outputs.
    ///
    /// Steps are isolated: an unknown agent id is skipped and a failing
    /// step is recorded and skipped, so later steps still run. The caller
    /// gets every response that was produced, in step order.
    pub async fn execute_workflow(
        &self,
        request: &GenerationRequest,
        agent_ids: &[String],
    ) -> Result<Vec<GenerationResponse>, OrchestratorError> {
        let mut outputs: Vec<GenerationResponse> = Vec::new();

        for agent_id in agent_ids {
            self.check_cancelled()?;

            let Some(agent) = self.agent(agent_id) else {
                warn!(agent = %agent_id, "workflow references unknown agent, skipping step");
                continue;
            };

            let step_request = if outputs.is_empty() {
                request.clone()
            } else {
                request.with_prompt(format!(
                    "{}\n\n{}",
                    request.prompt,
                    render_previous_outputs(&outputs)
                ))
            };

            match agent.process_request(&step_request).await {
                Ok(response) => outputs.push(response),
                Err(err) => {
                    error!(agent = %agent_id, error = %err, "workflow step failed, continuing");
                    self.logger.log(GenerationEvent::new(
                        "workflow_step_failed",
                        json!({ "agent": agent_id, "error": err.to_string() }),
                    ));
                }
            }
        }

        self.logger.log(GenerationEvent::new(
            "workflow_completed",
            json!({
                "workflow_id": request.workflow_id,
                "steps_requested": agent_ids.len(),
                "steps_completed": outputs.len(),
            }),
        ));
        Ok(outputs)
    }

    /// Snapshots of every registered agent, in registration order.
    pub fn all_agent_status(&self) -> Vec<AgentSnapshot> {
        self.pool().iter().map(|agent| agent.snapshot()).collect()
    }

    pub fn agent(&self, id: &str) -> Option<Arc<dyn Agent>> {
        self.pool().into_iter().find(|agent| agent.id() == id)
    }

    /// Register an agent. An existing agent with the same id is replaced
    /// in place, keeping its position in the registration order.
    pub fn add_agent(&self, agent: Arc<dyn Agent>) {
        let mut agents = self.agents.write().expect("agent pool lock poisoned");
        if let Some(slot) = agents.iter_mut().find(|a| a.id() == agent.id()) {
            *slot = agent;
        } else {
            agents.push(agent);
        }
    }

    pub fn remove_agent(&self, id: &str) -> bool {
        let mut agents = self.agents.write().expect("agent pool lock poisoned");
        let before = agents.len();
        agents.retain(|agent| agent.id() != id);
        agents.len() < before
    }

    /// Merge a partial config into the named agent. Returns false for an
    /// unknown id.
    pub fn update_agent_config(&self, id: &str, patch: &AgentConfigPatch) -> bool {
        match self.agent(id) {
            Some(agent) => {
                agent.agent_core().update_config(patch);
                agent.agent_core().validate_config();
                true
            }
            None => false,
        }
    }

    /// Return an errored agent to service. Returns false for an unknown
    /// id.
    pub fn reset_agent(&self, id: &str) -> bool {
        match self.agent(id) {
            Some(agent) => {
                agent.agent_core().reset();
                true
            }
            None => false,
        }
    }
}

fn render_previous_outputs(outputs: &[GenerationResponse]) -> String {
    let mut rendered = String::from("Previous agent outputs for context:");
    for (index, output) in outputs.iter().enumerate() {
        rendered.push_str(&format!(
            "\n{}. {}: {}",
            index + 1,
            output.agent_used,
            output.content_preview(200)
        ));
    }
    rendered
}

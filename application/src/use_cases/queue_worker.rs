//! Background queue worker.
//!
//! Drains pending generation jobs through the orchestrator: pick up,
//! mark processing, route, then mark completed or failed. Failed jobs go
//! back to pending until their attempts run out.

use crate::ports::job_queue::{JobQueue, QueueError};
use crate::use_cases::orchestrator::AgentOrchestrator;
use forge_domain::QueueJob;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub struct QueueWorker {
    orchestrator: Arc<AgentOrchestrator>,
    queue: Arc<dyn JobQueue>,
    cancellation: CancellationToken,
}

impl QueueWorker {
    pub fn new(orchestrator: Arc<AgentOrchestrator>, queue: Arc<dyn JobQueue>) -> Self {
        Self {
            orchestrator,
            queue,
            cancellation: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Process at most one pending job. Returns the job in its final
    /// state for this pass, or `None` when the queue was empty.
    pub async fn run_once(&self) -> Result<Option<QueueJob>, QueueError> {
        let Some(mut job) = self.queue.next_pending().await? else {
            return Ok(None);
        };

        job.mark_processing();
        self.queue.update(job.clone()).await?;
        info!(job = %job.id, attempt = job.attempts, "processing queued job");

        match self.orchestrator.process_request(&job.payload).await {
            Ok(_) => {
                job.mark_completed();
                info!(job = %job.id, "job completed");
            }
            Err(err) => {
                job.mark_failed(err.to_string());
                warn!(
                    job = %job.id,
                    attempt = job.attempts,
                    retryable = job.can_retry(),
                    error = %err,
                    "job attempt failed"
                );
            }
        }
        self.queue.update(job.clone()).await?;
        Ok(Some(job))
    }

    /// Drain the queue until it is empty or the worker is cancelled.
    /// Returns the number of job attempts that ran.
    pub async fn drain(&self) -> Result<usize, QueueError> {
        let mut processed = 0;
        while !self.cancellation.is_cancelled() {
            match self.run_once().await? {
                Some(_) => processed += 1,
                None => break,
            }
        }
        Ok(processed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::Agent;
    use crate::test_support::{ScriptedAgent, TestQueue};
    use forge_domain::{AgentType, GenerationRequest, JobStatus, QueueJob};

    fn worker(
        agents: Vec<Arc<ScriptedAgent>>,
        queue: Arc<TestQueue>,
    ) -> QueueWorker {
        let pool: Vec<Arc<dyn Agent>> = agents.into_iter().map(|a| a as Arc<dyn Agent>).collect();
        let orchestrator = Arc::new(AgentOrchestrator::with_pool(
            pool,
            Arc::clone(&queue) as Arc<dyn JobQueue>,
        ));
        QueueWorker::new(orchestrator, queue)
    }

    async fn enqueue(queue: &TestQueue, prompt: &str) -> String {
        let job = QueueJob::generation(GenerationRequest::new(prompt, "wf-test"));
        let id = job.id.clone();
        queue.add_job(job).await.unwrap();
        id
    }

    #[tokio::test]
    async fn test_run_once_completes_a_job() {
        let queue = TestQueue::new();
        let writer = Arc::new(ScriptedAgent::new("writer", AgentType::Content, vec![]));
        let worker = worker(vec![writer], Arc::clone(&queue));

        let id = enqueue(&queue, "write a post").await;
        let job = worker.run_once().await.unwrap().unwrap();

        assert_eq!(job.id, id);
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.attempts, 1);

        // The stored copy reflects the terminal state.
        let stored = queue.job(&id).await.unwrap().unwrap();
        assert_eq!(stored.status, JobStatus::Completed);
        assert!(stored.completed_at.is_some());
    }

    #[tokio::test]
    async fn test_run_once_on_empty_queue() {
        let queue = TestQueue::new();
        let writer = Arc::new(ScriptedAgent::new("writer", AgentType::Content, vec![]));
        let worker = worker(vec![writer], Arc::clone(&queue));
        assert!(worker.run_once().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_job_retries_until_attempts_exhausted() {
        let queue = TestQueue::new();
        let broken = Arc::new(ScriptedAgent::failing("broken", AgentType::Content));
        let worker = worker(vec![Arc::clone(&broken)], Arc::clone(&queue));

        let id = enqueue(&queue, "write a post").await;

        // The failing agent locks into error after the first attempt, so
        // later attempts fail with no suitable agent instead.
        let job = worker.run_once().await.unwrap().unwrap();
        assert_eq!(job.status, JobStatus::Pending);
        assert_eq!(job.attempts, 1);

        let job = worker.run_once().await.unwrap().unwrap();
        assert_eq!(job.status, JobStatus::Pending);
        assert_eq!(job.attempts, 2);

        let job = worker.run_once().await.unwrap().unwrap();
        assert_eq!(job.status, JobStatus::Failed);
        assert_eq!(job.attempts, 3);
        assert!(job.error.is_some());

        // A terminal job is never handed out again.
        assert!(worker.run_once().await.unwrap().is_none());
        let stored = queue.job(&id).await.unwrap().unwrap();
        assert_eq!(stored.status, JobStatus::Failed);
    }

    #[tokio::test]
    async fn test_drain_processes_everything_pending() {
        let queue = TestQueue::new();
        let writer = Arc::new(ScriptedAgent::new("writer", AgentType::Content, vec![]));
        let worker = worker(vec![writer], Arc::clone(&queue));

        enqueue(&queue, "write a post").await;
        enqueue(&queue, "draft an email").await;
        enqueue(&queue, "summarize this article").await;

        let processed = worker.drain().await.unwrap();
        assert_eq!(processed, 3);
        assert!(queue.next_pending().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_drain_stops_on_cancellation() {
        let queue = TestQueue::new();
        let writer = Arc::new(ScriptedAgent::new("writer", AgentType::Content, vec![]));
        let token = CancellationToken::new();
        let worker = worker(vec![writer], Arc::clone(&queue)).with_cancellation(token.clone());

        enqueue(&queue, "write a post").await;
        token.cancel();

        let processed = worker.drain().await.unwrap();
        assert_eq!(processed, 0);
        assert!(queue.next_pending().await.unwrap().is_some());
    }
}

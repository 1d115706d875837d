//! In-memory job queue.
//!
//! Jobs live for the lifetime of the process. Good enough for a single
//! worker; a persistent backend would implement the same port.

use async_trait::async_trait;
use forge_application::ports::job_queue::{JobQueue, QueueError};
use forge_domain::{JobStatus, QueueJob};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryJobQueue {
    /// Insertion order doubles as FIFO order within a priority level.
    jobs: Mutex<Vec<QueueJob>>,
}

impl InMemoryJobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.jobs.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.jobs.lock().await.is_empty()
    }
}

#[async_trait]
impl JobQueue for InMemoryJobQueue {
    async fn add_job(&self, job: QueueJob) -> Result<(), QueueError> {
        self.jobs.lock().await.push(job);
        Ok(())
    }

    async fn next_pending(&self) -> Result<Option<QueueJob>, QueueError> {
        let jobs = self.jobs.lock().await;
        // Strict comparison keeps the earliest job within a priority.
        let mut next: Option<&QueueJob> = None;
        for job in jobs.iter().filter(|job| job.status == JobStatus::Pending) {
            if next.is_none_or(|best| job.priority > best.priority) {
                next = Some(job);
            }
        }
        Ok(next.cloned())
    }

    async fn update(&self, job: QueueJob) -> Result<(), QueueError> {
        let mut jobs = self.jobs.lock().await;
        match jobs.iter_mut().find(|j| j.id == job.id) {
            Some(slot) => {
                *slot = job;
                Ok(())
            }
            None => Err(QueueError::UnknownJob(job.id)),
        }
    }

    async fn job(&self, id: &str) -> Result<Option<QueueJob>, QueueError> {
        Ok(self.jobs.lock().await.iter().find(|j| j.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_domain::GenerationRequest;

    fn job(prompt: &str) -> QueueJob {
        QueueJob::generation(GenerationRequest::new(prompt, "wf-1"))
    }

    #[tokio::test]
    async fn test_fifo_within_priority() {
        let queue = InMemoryJobQueue::new();
        let first = job("first");
        let second = job("second");
        queue.add_job(first.clone()).await.unwrap();
        queue.add_job(second).await.unwrap();

        let next = queue.next_pending().await.unwrap().unwrap();
        assert_eq!(next.id, first.id);
    }

    #[tokio::test]
    async fn test_higher_priority_served_first() {
        let queue = InMemoryJobQueue::new();
        let normal = job("normal");
        let mut urgent = job("urgent");
        urgent.priority = 5;
        queue.add_job(normal).await.unwrap();
        queue.add_job(urgent.clone()).await.unwrap();

        let next = queue.next_pending().await.unwrap().unwrap();
        assert_eq!(next.id, urgent.id);
    }

    #[tokio::test]
    async fn test_terminal_jobs_are_not_handed_out() {
        let queue = InMemoryJobQueue::new();
        let mut job = job("once");
        queue.add_job(job.clone()).await.unwrap();

        job.mark_processing();
        job.mark_completed();
        queue.update(job.clone()).await.unwrap();

        assert!(queue.next_pending().await.unwrap().is_none());
        let stored = queue.job(&job.id).await.unwrap().unwrap();
        assert_eq!(stored.status, JobStatus::Completed);
    }

    #[tokio::test]
    async fn test_update_unknown_job() {
        let queue = InMemoryJobQueue::new();
        let err = queue.update(job("ghost")).await.unwrap_err();
        assert!(matches!(err, QueueError::UnknownJob(_)));
    }
}

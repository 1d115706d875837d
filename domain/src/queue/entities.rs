//! Queue job entity and lifecycle.
//!
//! A [`QueueJob`] is created when a request takes the asynchronous path.
//! The orchestrator only creates and enqueues jobs; the lifecycle
//! continuation (processing through to a terminal state) is owned by the
//! queue worker.

use crate::agent::value_objects::GenerationRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job type for generation requests.
pub const GENERATION_JOB_TYPE: &str = "ai-generation";

const DEFAULT_PRIORITY: u8 = 1;
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Status of a queued job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Waiting to be picked up by a worker
    #[default]
    Pending,
    /// A worker is running the job
    Processing,
    /// Finished successfully
    Completed,
    /// Exhausted its attempts without success
    Failed,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

/// A queued generation job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueJob {
    pub id: String,
    pub job_type: String,
    pub payload: GenerationRequest,
    pub priority: u8,
    pub status: JobStatus,
    pub attempts: u32,
    pub max_attempts: u32,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueueJob {
    /// Create a pending generation job with a fresh id.
    ///
    /// Ids follow the `ai-gen-<timestamp>-<random>` convention.
    pub fn generation(payload: GenerationRequest) -> Self {
        let now = Utc::now();
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        Self {
            id: format!("ai-gen-{}-{}", now.timestamp_millis(), &suffix[..8]),
            job_type: GENERATION_JOB_TYPE.to_string(),
            payload,
            priority: DEFAULT_PRIORITY,
            status: JobStatus::Pending,
            attempts: 0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            created_at: now,
            processed_at: None,
            completed_at: None,
            error: None,
        }
    }

    /// Transition to `Processing`, stamping the pickup time and counting
    /// the attempt.
    pub fn mark_processing(&mut self) {
        self.status = JobStatus::Processing;
        self.attempts += 1;
        self.processed_at = Some(Utc::now());
    }

    pub fn mark_completed(&mut self) {
        self.status = JobStatus::Completed;
        self.completed_at = Some(Utc::now());
    }

    /// Record a failed attempt. The job returns to `Pending` while retries
    /// remain, otherwise it reaches the terminal `Failed` state.
    pub fn mark_failed(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        if self.attempts < self.max_attempts {
            self.status = JobStatus::Pending;
        } else {
            self.status = JobStatus::Failed;
            self.completed_at = Some(Utc::now());
        }
    }

    pub fn can_retry(&self) -> bool {
        self.attempts < self.max_attempts && !self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> QueueJob {
        QueueJob::generation(GenerationRequest::new("write a post", "wf-1"))
    }

    #[test]
    fn test_generation_job_defaults() {
        let job = job();
        assert!(job.id.starts_with("ai-gen-"));
        assert_eq!(job.job_type, GENERATION_JOB_TYPE);
        assert_eq!(job.priority, 1);
        assert_eq!(job.status, JobStatus::Pending);
        assert_eq!(job.attempts, 0);
        assert_eq!(job.max_attempts, 3);
        assert!(job.processed_at.is_none());
    }

    #[test]
    fn test_job_ids_are_unique() {
        assert_ne!(job().id, job().id);
    }

    #[test]
    fn test_processing_counts_attempts() {
        let mut job = job();
        job.mark_processing();
        assert_eq!(job.status, JobStatus::Processing);
        assert_eq!(job.attempts, 1);
        assert!(job.processed_at.is_some());
    }

    #[test]
    fn test_failure_returns_to_pending_until_attempts_exhausted() {
        let mut job = job();

        for attempt in 1..=3 {
            job.mark_processing();
            job.mark_failed(format!("provider error {attempt}"));
        }

        assert_eq!(job.status, JobStatus::Failed);
        assert_eq!(job.attempts, 3);
        assert!(job.completed_at.is_some());
        assert_eq!(job.error.as_deref(), Some("provider error 3"));
    }

    #[test]
    fn test_failure_before_exhaustion_is_retryable() {
        let mut job = job();
        job.mark_processing();
        job.mark_failed("transient");
        assert_eq!(job.status, JobStatus::Pending);
        assert!(job.can_retry());
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut job = job();
        job.mark_processing();
        job.mark_completed();
        assert!(job.status.is_terminal());
        assert!(!job.can_retry());
    }
}

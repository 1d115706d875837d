//! Job queue port
//!
//! The orchestrator's asynchronous path enqueues a job and returns
//! immediately; a worker later drains pending jobs through the same port.

use async_trait::async_trait;
use forge_domain::QueueJob;
use thiserror::Error;

/// Errors from the queue backend
#[derive(Error, Debug)]
pub enum QueueError {
    #[error("Queue unavailable: {0}")]
    Unavailable(String),

    #[error("Unknown job: {0}")]
    UnknownJob(String),
}

/// A backing store for queued generation jobs.
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Fire-and-forget enqueue. No synchronous confirmation of processing.
    async fn add_job(&self, job: QueueJob) -> Result<(), QueueError>;

    /// Hand out the next pending job, highest priority first, oldest
    /// within a priority. Returns `None` when nothing is pending.
    async fn next_pending(&self) -> Result<Option<QueueJob>, QueueError>;

    /// Persist an updated job state (status transition, attempt count).
    async fn update(&self, job: QueueJob) -> Result<(), QueueError>;

    /// Look up a job by id.
    async fn job(&self, id: &str) -> Result<Option<QueueJob>, QueueError>;
}

//! Orchestration use cases.

pub mod orchestrator;
pub mod queue_worker;

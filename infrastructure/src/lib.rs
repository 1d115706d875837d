//! Infrastructure layer for contentforge
//!
//! External adapters: HTTP provider clients behind the LLM gateway port,
//! the configuration loader, the in-memory job queue, and the JSONL
//! generation logger.

pub mod config;
pub mod logging;
pub mod providers;
pub mod queue;

pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlGenerationLogger;
pub use providers::HttpLlmGateway;
pub use queue::InMemoryJobQueue;

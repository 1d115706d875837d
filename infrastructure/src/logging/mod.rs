//! Generation event log sinks.

pub mod jsonl_logger;

pub use jsonl_logger::JsonlGenerationLogger;

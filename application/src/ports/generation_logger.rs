//! Generation event logging port
//!
//! Fire-and-forget structured events recording selections, completions,
//! and failures. Purely observational; no behavior depends on it.

use serde_json::Value;

/// A single structured event.
#[derive(Debug, Clone)]
pub struct GenerationEvent {
    pub event_type: String,
    pub payload: Value,
}

impl GenerationEvent {
    pub fn new(event_type: impl Into<String>, payload: Value) -> Self {
        Self {
            event_type: event_type.into(),
            payload,
        }
    }
}

/// Sink for generation events.
///
/// Implementations must not fail the caller; logging errors are swallowed
/// (and at most warned about) inside the adapter.
pub trait GenerationLogger: Send + Sync {
    fn log(&self, event: GenerationEvent);
}

/// No-op logger used when no sink is configured.
pub struct NoGenerationLog;

impl GenerationLogger for NoGenerationLog {
    fn log(&self, _event: GenerationEvent) {}
}

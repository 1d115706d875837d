//! Request and response value objects.
//!
//! [`GenerationRequest`] is an immutable value passed in by the caller;
//! the orchestrator derives *new* requests (never mutating the original)
//! when injecting prior-step context into a workflow. [`GenerationResponse`]
//! is produced once per successful generation and is likewise immutable.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Editor-side context accompanying a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    /// Existing content the caller wants improved rather than replaced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_content: Option<String>,
}

/// A content generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Identifies the caller-side workflow configuration; opaque here.
    pub workflow_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<RequestContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_base_ids: Option<Vec<String>>,
}

impl GenerationRequest {
    /// Create a new request.
    ///
    /// # Panics
    /// Panics if the prompt is empty or only whitespace.
    pub fn new(prompt: impl Into<String>, workflow_id: impl Into<String>) -> Self {
        Self::try_new(prompt, workflow_id).expect("prompt cannot be empty")
    }

    /// Try to create a new request, rejecting empty prompts.
    pub fn try_new(
        prompt: impl Into<String>,
        workflow_id: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(DomainError::EmptyPrompt);
        }
        Ok(Self {
            prompt,
            workflow_id: workflow_id.into(),
            context: None,
            knowledge_base_ids: None,
        })
    }

    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_knowledge_bases(mut self, ids: Vec<String>) -> Self {
        self.knowledge_base_ids = Some(ids);
        self
    }

    /// Derive a new request with a different prompt, keeping every other
    /// field. Used for workflow context injection.
    pub fn with_prompt(&self, prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..self.clone()
        }
    }

    /// Lowercased prompt for keyword heuristics.
    pub fn prompt_lower(&self) -> String {
        self.prompt.to_lowercase()
    }

    /// Selected content from the editor context, if any.
    pub fn selected_content(&self) -> Option<&str> {
        self.context
            .as_ref()
            .and_then(|c| c.selected_content.as_deref())
    }
}

/// Token accounting for one generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// The outcome of one successful generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub content: String,
    /// Agent-reported output quality in [0, 1]; not independently verified.
    pub confidence_score: f64,
    pub token_usage: TokenUsage,
    /// Wall-clock seconds, measured by the dispatching agent.
    pub processing_time: f64,
    /// Id of the agent that produced this response.
    pub agent_used: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl GenerationResponse {
    pub fn new(content: impl Into<String>, confidence_score: f64) -> Self {
        Self {
            content: content.into(),
            confidence_score,
            token_usage: TokenUsage::default(),
            processing_time: 0.0,
            agent_used: String::new(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.token_usage = usage;
        self
    }

    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Content truncated to `max_chars` characters with an ellipsis,
    /// for workflow context summaries.
    pub fn content_preview(&self, max_chars: usize) -> String {
        let preview: String = self.content.chars().take(max_chars).collect();
        format!("{preview}...")
    }
}

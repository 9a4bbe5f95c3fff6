use serde::Serialize;

use crate::config::ProbeConfig;

/// A single chat message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: text.into(),
        }
    }
}

/// Body for `POST /v1/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    /// Always present; the shim expects `null` rather than `[]` when no stop
    /// strings were given.
    pub stop: Option<Vec<String>>,
}

impl ChatRequest {
    /// Wrap the configured prompt as a single user message.
    pub fn from_config(config: &ProbeConfig) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![ChatMessage::user(&config.prompt)],
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            top_p: config.top_p,
            stop: none_if_empty(&config.stop),
        }
    }
}

/// Body for `POST /v1/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub stop: Option<Vec<String>>,
}

impl CompletionRequest {
    pub fn from_config(config: &ProbeConfig) -> Self {
        Self {
            model: config.model.clone(),
            prompt: config.prompt.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            top_p: config.top_p,
            stop: none_if_empty(&config.stop),
        }
    }
}

fn none_if_empty(stops: &[String]) -> Option<Vec<String>> {
    if stops.is_empty() {
        None
    } else {
        Some(stops.to_vec())
    }
}

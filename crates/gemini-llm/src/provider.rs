use async_trait::async_trait;

use crate::error::LlmError;
use crate::message::Content;

/// A single outbound generation call.
///
/// `history` holds the prior turns of a conversation and `message` the live
/// user turn. Generation parameters left as `None` fall back to the backend's
/// own defaults; `model` falls back to the provider's configured model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerationRequest {
    pub model: Option<String>,
    pub history: Vec<Content>,
    pub message: String,
    pub temperature: Option<f64>,
    pub max_output_tokens: Option<u32>,
}

impl GenerationRequest {
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            message: prompt.into(),
            ..Self::default()
        }
    }

    pub fn with_history(mut self, history: Vec<Content>) -> Self {
        self.history = history;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Sends one request and returns the generated text.
    async fn generate(&self, request: GenerationRequest) -> Result<String, LlmError>;

    /// Model identifier used when a request does not name one.
    fn default_model(&self) -> &str;
}

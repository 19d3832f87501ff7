//! Test doubles shared by unit tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use gemini_llm::{GenerationRequest, LlmError, LlmProvider};

/// Provider that records every request and answers with a fixed reply.
pub(crate) struct RecordingProvider {
    reply: Result<String, LlmError>,
    delay: Option<Duration>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl RecordingProvider {
    pub(crate) fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(error: LlmError) -> Self {
        Self {
            reply: Err(error),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Replies only after `delay`, for exercising overlapping requests.
    pub(crate) fn slow(text: &str, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::replying(text)
        }
    }

    pub(crate) fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl LlmProvider for RecordingProvider {
    async fn generate(&self, request: GenerationRequest) -> Result<String, LlmError> {
        self.requests.lock().expect("requests lock").push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply.clone()
    }

    fn default_model(&self) -> &str {
        "fake-model"
    }
}

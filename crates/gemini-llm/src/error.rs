/// Failures of a single generation call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LlmError {
    #[error("missing LLM API key")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("[{status}] {message}")]
    Api { status: u16, message: String },

    #[error("empty response: {0}")]
    EmptyResponse(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(error: reqwest::Error) -> Self {
        LlmError::Transport(error.to_string())
    }
}

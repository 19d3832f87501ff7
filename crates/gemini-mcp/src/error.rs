use gemini_llm::LlmError;

/// Unified error type for the gemini-mcp crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// Startup configuration is unusable.
    #[error("{0}")]
    Config(String),

    /// The invocation named a tool absent from the registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A required argument is missing or an argument has the wrong shape.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The generation backend failed.
    #[error(transparent)]
    Backend(#[from] LlmError),
}

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;

//! Tools of `gemini-mcp-server`: chat, multi-turn chat and code analysis.

use gemini_llm::{Content, GenerationRequest};
use serde_json::json;

use crate::error::{CoreError, CoreResult};
use crate::prompts::AnalysisType;
use crate::tools::{ArgumentSchema, Arguments, Schema, ToolDescriptor, ToolRegistry};

use super::DEFAULT_MAX_OUTPUT_TOKENS;

pub const SERVER_NAME: &str = "gemini-mcp-server";

pub const GEMINI_CHAT: &str = "gemini_chat";
pub const GEMINI_CHAT_WITH_HISTORY: &str = "gemini_chat_with_history";
pub const GEMINI_ANALYZE_CODE: &str = "gemini_analyze_code";

const DEFAULT_TEMPERATURE: f64 = 1.0;

pub fn registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    // ── gemini_chat ───────────────────────────────────────────────
    registry.register(
        ToolDescriptor::new(
            GEMINI_CHAT,
            "Send a message to Google Gemini 2.5 Pro and get a response",
            Schema::object()
                .required("message", ArgumentSchema::string("The message to send to Gemini"))
                .optional("temperature", temperature_argument())
                .optional(
                    "max_tokens",
                    ArgumentSchema::number("Maximum tokens in response. Default: 8192")
                        .with_default(json!(DEFAULT_MAX_OUTPUT_TOKENS)),
                ),
        ),
        Box::new(chat_request),
    );

    // ── gemini_chat_with_history ──────────────────────────────────
    registry.register(
        ToolDescriptor::new(
            GEMINI_CHAT_WITH_HISTORY,
            "Multi-turn conversation with Gemini maintaining context",
            Schema::object()
                .required(
                    "messages",
                    ArgumentSchema::array(
                        "Array of conversation messages [{role: 'user'|'model', parts: [{text: 'message'}]}]",
                        json!({
                            "type": "object",
                            "properties": {
                                "role": {"type": "string", "enum": ["user", "model"]},
                                "parts": {
                                    "type": "array",
                                    "items": {
                                        "type": "object",
                                        "properties": {"text": {"type": "string"}}
                                    }
                                }
                            }
                        }),
                    ),
                )
                .optional("temperature", temperature_argument()),
        ),
        Box::new(chat_with_history_request),
    );

    // ── gemini_analyze_code ───────────────────────────────────────
    registry.register(
        ToolDescriptor::new(
            GEMINI_ANALYZE_CODE,
            "Analyze code using Gemini for bugs, improvements, or explanations",
            Schema::object()
                .required("code", ArgumentSchema::string("The code to analyze"))
                .optional(
                    "language",
                    ArgumentSchema::string("Programming language (e.g., javascript, python, go)"),
                )
                .optional(
                    "analysis_type",
                    ArgumentSchema::string(
                        "Type of analysis: 'bugs', 'optimize', 'explain', 'review'",
                    )
                    .with_enum(&AnalysisType::NAMES)
                    .with_default(json!("review")),
                ),
        ),
        Box::new(analyze_code_request),
    );

    registry
}

fn temperature_argument() -> ArgumentSchema {
    ArgumentSchema::number("Controls randomness (0.0-2.0). Default: 1.0")
        .with_default(json!(DEFAULT_TEMPERATURE))
}

fn chat_request(args: &Arguments) -> CoreResult<GenerationRequest> {
    Ok(GenerationRequest::from_prompt(args.str("message")?)
        .with_temperature(args.f64("temperature")?)
        .with_max_output_tokens(args.u32("max_tokens")?))
}

/// Every turn but the last becomes history; the last turn's first part is sent live.
fn chat_with_history_request(args: &Arguments) -> CoreResult<GenerationRequest> {
    let mut messages: Vec<Content> = args.parse("messages")?;
    let last = messages.pop().ok_or_else(|| {
        CoreError::InvalidArguments("'messages' must contain at least one message".to_string())
    })?;
    let message = last.first_text().ok_or_else(|| {
        CoreError::InvalidArguments("the last message has no text part".to_string())
    })?;

    Ok(GenerationRequest::from_prompt(message)
        .with_history(messages)
        .with_temperature(args.f64("temperature")?)
        .with_max_output_tokens(DEFAULT_MAX_OUTPUT_TOKENS))
}

fn analyze_code_request(args: &Arguments) -> CoreResult<GenerationRequest> {
    let code = args.str("code")?;
    let language = args.opt_str("language")?.unwrap_or_default();
    let analysis = AnalysisType::from_name(args.opt_str("analysis_type")?.unwrap_or_default());

    Ok(GenerationRequest::from_prompt(analysis.render(language, code)))
}

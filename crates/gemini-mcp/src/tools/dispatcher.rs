//! Tool dispatch pipeline: lookup, default, build prompt, generate, wrap.

use std::sync::Arc;

use gemini_llm::{GenerationRequest, LlmProvider};
use serde_json::Value;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use super::envelope::ResponseEnvelope;
use super::invocation::InvocationRecord;
use super::registry::ToolRegistry;
use super::schema::ToolDescriptor;

/// Executes exactly one tool per invocation and normalizes the outcome.
///
/// Holds no mutable state, so one instance serves concurrent invocations.
pub struct Dispatcher {
    registry: ToolRegistry,
    provider: Arc<dyn LlmProvider>,
}

impl Dispatcher {
    pub fn new(registry: ToolRegistry, provider: Arc<dyn LlmProvider>) -> Self {
        Self { registry, provider }
    }

    pub fn list_tools(&self) -> Vec<&ToolDescriptor> {
        self.registry.list_tools()
    }

    /// Runs a tool and always returns an envelope, never an error.
    pub async fn invoke(&self, tool_name: &str, arguments: Value) -> ResponseEnvelope {
        let mut record = InvocationRecord::start(tool_name);

        let outcome = match self.prepare(tool_name, &arguments) {
            Ok(request) => {
                record.model = request.model.clone();
                self.provider
                    .generate(request)
                    .await
                    .map_err(CoreError::from)
            }
            Err(error) => Err(error),
        };

        record.finish(&outcome);
        ResponseEnvelope::from(outcome)
    }

    /// Builds the outbound request for a tool without calling the backend.
    pub fn prepare(&self, tool_name: &str, arguments: &Value) -> CoreResult<GenerationRequest> {
        let tool = self
            .registry
            .lookup(tool_name)
            .ok_or_else(|| CoreError::UnknownTool(tool_name.to_string()))?;

        let arguments = tool.descriptor.input_schema.apply(arguments)?;
        let mut request = (tool.handler)(&arguments)?;
        if request.model.is_none() {
            request.model = Some(self.provider.default_model().to_string());
        }

        debug!(
            tool = %tool_name,
            history = request.history.len(),
            prompt_chars = request.message.len(),
            "prepared generation request"
        );
        Ok(request)
    }
}

//! Static catalog of tools and their handlers.

use std::collections::HashMap;

use gemini_llm::GenerationRequest;

use crate::error::CoreResult;
use super::arguments::Arguments;
use super::schema::ToolDescriptor;

/// Handler type: builds the single outbound generation request for a tool.
///
/// Handlers are pure; the dispatcher performs the backend call.
pub type ToolHandler = Box<dyn Fn(&Arguments) -> CoreResult<GenerationRequest> + Send + Sync>;

pub struct RegisteredTool {
    pub descriptor: ToolDescriptor,
    pub handler: ToolHandler,
}

/// Registry of tools in registration order.
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    by_name: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register a tool. Panics if a tool with the same name already exists.
    pub fn register(&mut self, descriptor: ToolDescriptor, handler: ToolHandler) {
        if self.by_name.contains_key(&descriptor.name) {
            panic!("duplicate tool: {}", descriptor.name);
        }
        self.by_name
            .insert(descriptor.name.clone(), self.tools.len());
        self.tools.push(RegisteredTool {
            descriptor,
            handler,
        });
    }

    pub fn lookup(&self, name: &str) -> Option<&RegisteredTool> {
        self.by_name.get(name).map(|&index| &self.tools[index])
    }

    /// Descriptors in registration order.
    pub fn list_tools(&self) -> Vec<&ToolDescriptor> {
        self.tools.iter().map(|tool| &tool.descriptor).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//! Tool descriptors and their argument schemas.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult};
use super::arguments::Arguments;

/// JSON type of a single argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentType {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

/// Schema of one named argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgumentSchema {
    #[serde(rename = "type")]
    pub kind: ArgumentType,
    pub description: String,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Value>,
}

impl ArgumentSchema {
    pub fn new(kind: ArgumentType, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            allowed: None,
            default: None,
            items: None,
        }
    }

    pub fn string(description: impl Into<String>) -> Self {
        Self::new(ArgumentType::String, description)
    }

    pub fn number(description: impl Into<String>) -> Self {
        Self::new(ArgumentType::Number, description)
    }

    pub fn boolean(description: impl Into<String>) -> Self {
        Self::new(ArgumentType::Boolean, description)
    }

    pub fn array(description: impl Into<String>, items: Value) -> Self {
        Self {
            items: Some(items),
            ..Self::new(ArgumentType::Array, description)
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_enum(mut self, allowed: &[&str]) -> Self {
        self.allowed = Some(allowed.iter().map(|value| value.to_string()).collect());
        self
    }
}

/// Object schema for a tool's arguments.
///
/// Serializes as a JSON Schema object, which is what `tools/list` advertises.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    kind: &'static str,
    pub properties: BTreeMap<String, ArgumentSchema>,
    pub required: Vec<String>,
}

impl Default for Schema {
    fn default() -> Self {
        Self::object()
    }
}

impl Schema {
    pub fn object() -> Self {
        Self {
            kind: "object",
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    pub fn required(mut self, name: &str, argument: ArgumentSchema) -> Self {
        self.properties.insert(name.to_string(), argument);
        self.required.push(name.to_string());
        self
    }

    pub fn optional(mut self, name: &str, argument: ArgumentSchema) -> Self {
        self.properties.insert(name.to_string(), argument);
        self
    }

    /// Checks required arguments and fills declared defaults.
    ///
    /// Only presence is enforced; `null` counts as absent. Values of the
    /// wrong type are left for the tool handler to reject. Anything other
    /// than an object or `null` is refused.
    pub fn apply(&self, raw: &Value) -> CoreResult<Arguments> {
        let mut values = match raw {
            Value::Object(map) => map.clone(),
            Value::Null => Map::new(),
            other => {
                return Err(CoreError::InvalidArguments(format!(
                    "arguments must be an object, got {}",
                    json_type_name(other)
                )));
            }
        };

        values.retain(|_, value| !value.is_null());

        for name in &self.required {
            if !values.contains_key(name) {
                return Err(CoreError::InvalidArguments(format!(
                    "missing required argument '{name}'"
                )));
            }
        }

        for (name, argument) in &self.properties {
            if let Some(default) = &argument.default {
                values
                    .entry(name.clone())
                    .or_insert_with(|| default.clone());
            }
        }

        Ok(Arguments::new(values))
    }
}

/// Static description of a tool, as advertised to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Schema,
}

impl ToolDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>, input_schema: Schema) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }

    pub fn required_arguments(&self) -> &[String] {
        &self.input_schema.required
    }
}

/// Returns a human-readable name for the JSON type of a value.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

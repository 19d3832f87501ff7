//! Typed access to a tool's (defaulted) arguments.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult};
use super::schema::json_type_name;

/// Arguments of one invocation after defaults have been applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arguments {
    values: Map<String, Value>,
}

impl Arguments {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn str(&self, name: &str) -> CoreResult<&str> {
        let value = self.require(name)?;
        value
            .as_str()
            .ok_or_else(|| wrong_type(name, "a string", value))
    }

    pub fn opt_str(&self, name: &str) -> CoreResult<Option<&str>> {
        match self.values.get(name) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| wrong_type(name, "a string", value)),
        }
    }

    pub fn f64(&self, name: &str) -> CoreResult<f64> {
        let value = self.require(name)?;
        value
            .as_f64()
            .ok_or_else(|| wrong_type(name, "a number", value))
    }

    /// Reads a non-negative whole number, accepting `8192.0` as well as `8192`.
    pub fn u32(&self, name: &str) -> CoreResult<u32> {
        let value = self.require(name)?;
        if let Some(number) = value.as_u64() {
            return u32::try_from(number)
                .map_err(|_| wrong_type(name, "a non-negative integer below 2^32", value));
        }
        match value.as_f64() {
            Some(number)
                if number.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&number) =>
            {
                Ok(number as u32)
            }
            _ => Err(wrong_type(name, "a non-negative integer", value)),
        }
    }

    pub fn bool(&self, name: &str) -> CoreResult<bool> {
        let value = self.require(name)?;
        value
            .as_bool()
            .ok_or_else(|| wrong_type(name, "a boolean", value))
    }

    pub fn string_list(&self, name: &str) -> CoreResult<Vec<String>> {
        self.parse(name)
    }

    /// Deserializes an argument into any serde type.
    pub fn parse<T: DeserializeOwned>(&self, name: &str) -> CoreResult<T> {
        let value = self.require(name)?;
        serde_json::from_value(value.clone())
            .map_err(|error| CoreError::InvalidArguments(format!("'{name}': {error}")))
    }

    fn require(&self, name: &str) -> CoreResult<&Value> {
        self.values.get(name).ok_or_else(|| {
            CoreError::InvalidArguments(format!("missing required argument '{name}'"))
        })
    }
}

fn wrong_type(name: &str, expected: &str, value: &Value) -> CoreError {
    CoreError::InvalidArguments(format!(
        "'{name}' must be {expected}, got {}",
        json_type_name(value)
    ))
}

//! Process configuration read once at startup.

use std::env;

use gemini_llm::settings::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use gemini_llm::LlmSettings;

use crate::error::{CoreError, CoreResult};

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const MODEL_ENV: &str = "GEMINI_MODEL";
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";

#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmSettings,
}

impl Config {
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CoreResult<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = non_empty(API_KEY_ENV).ok_or_else(|| {
            CoreError::Config(format!("{API_KEY_ENV} environment variable is required"))
        })?;
        let model = non_empty(MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = non_empty(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            llm: LlmSettings {
                base_url,
                api_key: Some(api_key),
                model,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn missing_key_is_a_config_error() {
        let error = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(
            error,
            CoreError::Config("GEMINI_API_KEY environment variable is required".to_string())
        );
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let result = Config::from_lookup(lookup_from(&[(API_KEY_ENV, "  ")]));
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = Config::from_lookup(lookup_from(&[(API_KEY_ENV, "k")])).unwrap();
        assert_eq!(config.llm.api_key.as_deref(), Some("k"));
        assert_eq!(config.llm.model, DEFAULT_MODEL);
        assert_eq!(config.llm.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn overrides_are_honoured() {
        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_ENV, "k"),
            (MODEL_ENV, "gemini-2.5-pro"),
            (BASE_URL_ENV, "http://localhost:9999"),
        ]))
        .unwrap();
        assert_eq!(config.llm.model, "gemini-2.5-pro");
        assert_eq!(config.llm.base_url, "http://localhost:9999");
    }
}

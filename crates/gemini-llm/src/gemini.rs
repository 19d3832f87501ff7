//! Google Gemini REST provider.

mod wire;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::LlmError;
use crate::provider::{GenerationRequest, LlmProvider};
use crate::settings::LlmSettings;

use wire::{error_message, GenerateContentRequest, GenerateContentResponse};

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    settings: LlmSettings,
}

impl GeminiProvider {
    pub fn new(settings: LlmSettings) -> Result<Self, LlmError> {
        let api_key = settings
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or(LlmError::MissingApiKey)?;
        let client = Client::builder()
            .user_agent(concat!("gemini-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_key,
            settings,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn generate(&self, request: GenerationRequest) -> Result<String, LlmError> {
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.settings.model.clone());
        let body = GenerateContentRequest::from(&request);
        debug!(
            model = %model,
            history = request.history.len(),
            prompt_chars = request.message.len(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint(&model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_message(status, &text),
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        let text = payload.into_text()?;
        debug!(model = %model, response_chars = text.len(), "generateContent succeeded");
        Ok(text)
    }

    fn default_model(&self) -> &str {
        &self.settings.model
    }
}

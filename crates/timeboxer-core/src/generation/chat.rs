//! OpenAI-compatible chat-completions provider.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{
    prompt::{user_prompt, SYSTEM_PROMPT},
    GenerationError, GenerationRequest, PlanGenerationService,
};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// API root used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Connection settings for the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Bearer key; without one every request fails with
    /// [`GenerationError::MissingApiKey`]
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Requests plans from a chat-completions API in JSON mode.
pub struct ChatCompletionsService {
    api_key: Option<String>,
    model: String,
    base_url: String,
    http: Client,
}

impl ChatCompletionsService {
    /// Create a new service from configuration.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, GenerationError> {
        debug!(
            "Configuring chat-completions provider {} ({})",
            config.base_url, config.model
        );
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Build the request body for the chat-completions API.
    fn build_request_body(&self, request: &GenerationRequest) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": user_prompt(request) },
            ],
            "response_format": { "type": "json_object" },
        })
    }
}

#[async_trait]
impl PlanGenerationService for ChatCompletionsService {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&self.build_request_body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletion = response.json().await?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::InvalidResponse("no choices returned".to_string()))?;

        parse_content(choice.message.content.as_deref())
    }
}

/// Parses the message content as JSON; empty content counts as `{}`.
fn parse_content(content: Option<&str>) -> Result<Value, GenerationError> {
    match content.map(str::trim) {
        None | Some("") => Ok(json!({})),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}

//! Client for a `/api/generate` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;

use super::{GenerationError, GenerationRequest, PlanGenerationService};

/// Path of the generation endpoint, relative to its base URL.
pub const GENERATE_PATH: &str = "/api/generate";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Posts `{goal, duration}` to a generation endpoint and returns its body.
///
/// Transport failures and non-JSON bodies are reported as errors; the
/// endpoint itself is expected to answer with a plan-shaped body even when
/// its provider fails.
pub struct EndpointClient {
    url: String,
    http: Client,
}

impl EndpointClient {
    /// Creates a client for the endpoint rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, GenerationError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, GenerationError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: format!("{}{GENERATE_PATH}", base_url.trim_end_matches('/')),
            http,
        })
    }

    /// Full URL requests are posted to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PlanGenerationService for EndpointClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, GenerationError> {
        debug!("POST {}", self.url);
        let response = self.http.post(&self.url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

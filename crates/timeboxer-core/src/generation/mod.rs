//! The plan generation boundary.
//!
//! A [`PlanGenerationService`] turns a goal and a duration into an untrusted
//! JSON document. Two implementations ship with the crate:
//!
//! - [`ChatCompletionsService`] asks an OpenAI-compatible chat-completions
//!   API for the plan directly.
//! - [`EndpointClient`] posts the request to a `/api/generate` endpoint (such
//!   as the one served by `tb serve`).
//!
//! Callers that must always end up with a plan use [`generate_plan`], which
//! never fails: errors and malformed output resolve to the fallback plan.
//! The endpoint side uses [`endpoint_response`], which likewise never fails.

use async_trait::async_trait;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    models::Plan,
    normalizer::{fallback_plan, normalize_result},
};

mod chat;
mod endpoint;
mod error;
pub mod prompt;


pub use chat::{ChatCompletionsService, ProviderConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use endpoint::{EndpointClient, GENERATE_PATH};
pub use error::GenerationError;

/// Body of a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// What the user wants to achieve
    pub goal: String,
    /// Total time budget as free text, e.g. "5 hours"
    pub duration: String,
}

impl GenerationRequest {
    pub fn new(goal: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            duration: duration.into(),
        }
    }
}

/// Produces raw plan documents. The output is untrusted and must go through
/// [`crate::normalizer`] before use.
#[async_trait]
pub trait PlanGenerationService: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, GenerationError>;
}

/// Generates a plan, resolving every failure to the fallback plan.
pub async fn generate_plan(
    service: &dyn PlanGenerationService,
    request: &GenerationRequest,
) -> Plan {
    info!(
        "Generating plan for '{}' within '{}'",
        request.goal, request.duration
    );
    normalize_result(service.generate(request).await)
}

/// Body returned by the generation endpoint: the provider's document as-is,
/// or the fallback plan when the provider fails.
pub async fn endpoint_response(
    service: &dyn PlanGenerationService,
    request: &GenerationRequest,
) -> Value {
    match service.generate(request).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Generation failed ({e}), responding with fallback plan");
            fallback_value()
        }
    }
}

fn fallback_value() -> Value {
    let plan = fallback_plan();
    serde_json::json!({
        "projectName": plan.project_name,
        "steps": plan.steps,
    })
}

//! Command-line argument wrappers.
//!
//! Each command's arguments are a clap `Args` struct; where a core type
//! exists for the same data, a `From` impl converts the wrapper so core types
//! stay free of clap attributes.
//!
//! ```text
//! User Input → CLI Args (clap) → Core types → Session
//! ```

use std::{net::SocketAddr, time::Duration};

use clap::Args;
use timeboxer_core::generation::{ProviderConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Connection settings for the chat-completions provider.
#[derive(Args, Clone)]
pub struct ProviderArgs {
    /// API key for the provider; without one the demo plan is used
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    /// Model to request plans from
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,
    /// Root URL of an OpenAI-compatible API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    /// Request timeout in seconds
    #[arg(long, default_value_t = 120)]
    pub timeout: u64,
}

impl From<ProviderArgs> for ProviderConfig {
    fn from(val: ProviderArgs) -> Self {
        ProviderConfig {
            api_key: val.api_key.filter(|key| !key.trim().is_empty()),
            model: val.model,
            base_url: val.base_url,
            timeout: Duration::from_secs(val.timeout),
        }
    }
}

/// Generate a new plan
///
/// The plan comes from the provider directly, or from a running
/// `tb serve` instance when `--endpoint` is given. If the provider fails or
/// answers with something that is not a plan, a fixed demo plan is used.
#[derive(Args)]
pub struct GenerateArgs {
    /// What you want to achieve
    pub goal: String,
    /// Total time budget, e.g. "5 hours"
    #[arg(short, long, default_value = "")]
    pub duration: String,
    /// Base URL of a generation endpoint to use instead of the provider
    #[arg(long)]
    pub endpoint: Option<String>,
    #[command(flatten)]
    pub provider: ProviderArgs,
}

/// Show the current plan
#[derive(Args)]
pub struct ShowArgs {
    /// Print the plan and its metrics as JSON
    #[arg(long)]
    pub json: bool,
}

/// Identifies one sub-task within a step.
#[derive(Args)]
pub struct SubTaskRef {
    #[arg(help = "Identifier of the step containing the sub-task")]
    pub step_id: String,
    #[arg(help = "Identifier of the sub-task")]
    pub sub_task_id: String,
}

#[derive(Args)]
pub struct ToggleArgs {
    #[command(flatten)]
    pub target: SubTaskRef,
}

#[derive(Args)]
pub struct EditArgs {
    #[command(flatten)]
    pub target: SubTaskRef,
    /// New text, stored verbatim
    pub text: String,
}

/// Change a sub-task's estimate
///
/// Anything that is not a whole, non-negative number of minutes is stored
/// as 0.
#[derive(Args)]
pub struct TimeArgs {
    #[command(flatten)]
    pub target: SubTaskRef,
    /// New estimate in minutes
    #[arg(allow_hyphen_values = true)]
    pub minutes: String,
}

/// Move a step
///
/// The step is removed from its position and inserted at the position the
/// target step occupies.
#[derive(Args)]
pub struct MoveArgs {
    #[arg(help = "Identifier of the step to move")]
    pub active_id: String,
    #[arg(help = "Identifier of the step whose position it takes")]
    pub over_id: String,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Confirm the reset (required to prevent accidental data loss)
    #[arg(long)]
    pub confirm: bool,
}

/// Serve `POST /api/generate`
///
/// The endpoint always answers 200 with either the provider's plan document
/// or the demo plan.
#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,
    #[command(flatten)]
    pub provider: ProviderArgs,
}

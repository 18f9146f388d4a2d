//! Core library for the Timeboxer plan generator.
//!
//! Timeboxer turns a free-text goal and a total time budget into a
//! hierarchical, time-boxed plan (steps made of sub-tasks, each with a
//! duration in minutes), then lets the user check off, edit, re-time and
//! reorder it while derived metrics are recomputed and the plan is saved
//! after every change.
//!
//! # Architecture
//!
//! - **Generation** ([`generation`]): the external plan service behind the
//!   [`PlanGenerationService`] trait, with a chat-completions provider and a
//!   client for a remote `/api/generate` endpoint
//! - **Normalization** ([`normalizer`]): turns untrusted output into a
//!   canonical [`Plan`], or the fixed fallback plan
//! - **State** ([`store`], [`reorder`], [`metrics`]): pure reducers over the
//!   active plan, the reorder gesture state machine and derived figures
//! - **Persistence** ([`persistence`], [`db`]): one JSON document in a
//!   key-value store, SQLite-backed by default
//! - **Session** ([`session`]): the controller tying all of the above
//!   together
//! - **Display** ([`display`]): markdown formatting for the terminal
//!
//! # Quick Start
//!
//! ```rust
//! use timeboxer_core::{
//!     generation::{ChatCompletionsService, ProviderConfig},
//!     SessionBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = SessionBuilder::new()
//!     .with_database_path(Some("timeboxer.db"))
//!     .build()
//!     .await?;
//!
//! session.set_goal("Learn React");
//! session.set_duration("5 hours");
//!
//! // Without an API key the provider fails and the fallback plan is used
//! let service = ChatCompletionsService::from_config(&ProviderConfig::default())?;
//! let plan = session.generate(&service).await?;
//! println!("{plan}");
//!
//! session.toggle_sub_task("step1", "st1");
//! println!("{}% done", session.metrics().progress);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod generation;
pub mod metrics;
pub mod models;
pub mod normalizer;
pub mod persistence;
pub mod reorder;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{LocalDateTime, PlanReport};
pub use error::{Result, TimeboxError};
pub use generation::{GenerationError, GenerationRequest, PlanGenerationService};
pub use metrics::PlanMetrics;
pub use models::{Plan, Step, SubTask};
pub use persistence::{KeyValueStore, PersistenceAdapter};
pub use session::{Session, SessionBuilder};
pub use store::PlanStore;

//! Display formatting for plans.
//!
//! Domain models implement [`std::fmt::Display`] directly, producing
//! markdown; wrapper types add context that does not belong on the model
//! itself, such as the save time of the active plan.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Plan, Step,    │───▶│  (PlanReport,   │───▶│     output      │
//! │  SubTask)       │    │  LocalDateTime) │    │   (terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models and metrics
//! - [`report`]: The `tb show` view with completion banner
//! - [`datetime`]: Date/time formatting utilities

pub mod datetime;
pub mod models;
pub mod report;

pub use datetime::LocalDateTime;
pub use report::{PlanReport, COMPLETION_MESSAGE};

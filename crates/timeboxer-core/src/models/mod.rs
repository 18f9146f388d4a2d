//! Data models for plans, steps and sub-tasks.
//!
//! A [`Plan`] is the root aggregate: a project name and an ordered sequence of
//! [`Step`]s, each holding an ordered sequence of [`SubTask`]s. Step order is
//! significant and user-reorderable; sub-task order is significant but fixed.
//!
//! The serialized form uses camelCase keys (`projectName`, `subTasks`) so the
//! same document is used for the generation wire format and for the persisted
//! session state.
//!
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use timeboxer_core::models::{Plan, Step, SubTask};
//!
//! let plan = Plan {
//!     project_name: "Learn Rust".to_string(),
//!     steps: vec![Step {
//!         id: "s1".to_string(),
//!         title: "Basics".to_string(),
//!         sub_tasks: vec![SubTask::new("t1", "Read the book", 90)],
//!     }],
//! };
//!
//! let json = serde_json::to_string(&plan).unwrap();
//! assert!(json.contains("\"projectName\""));
//! assert!(json.contains("\"subTasks\""));
//! ```

pub mod plan;
pub mod step;


pub use plan::Plan;
pub use step::{Step, SubTask};

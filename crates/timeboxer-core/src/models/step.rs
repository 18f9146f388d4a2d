//! Step and sub-task model definitions.

use serde::{Deserialize, Serialize};

/// One phase of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Identifier, unique among the plan's steps
    pub id: String,

    /// Brief title of the phase
    pub title: String,

    /// Sub-tasks in their fixed order
    #[serde(default)]
    pub sub_tasks: Vec<SubTask>,
}

/// Atomic, time-boxed unit of work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubTask {
    /// Identifier, assumed unique within the plan
    pub id: String,

    /// What needs to be done
    pub task: String,

    /// Estimated duration in minutes
    pub time: u32,

    /// Completion flag
    #[serde(default)]
    pub done: bool,
}

impl SubTask {
    /// Creates a sub-task that is not yet done.
    pub fn new(id: impl Into<String>, task: impl Into<String>, time: u32) -> Self {
        Self {
            id: id.into(),
            task: task.into(),
            time,
            done: false,
        }
    }
}

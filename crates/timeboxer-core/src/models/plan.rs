//! Plan model definition and lookup helpers.

use serde::{Deserialize, Serialize};

use super::{Step, SubTask};

/// Represents a complete plan: a project name and its ordered steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Display name of the project
    pub project_name: String,

    /// Steps in execution order
    pub steps: Vec<Step>,
}

impl Plan {
    /// Returns the step with the given id, if any.
    pub fn step(&self, step_id: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == step_id)
    }

    /// Returns the position of the step with the given id.
    pub fn step_index(&self, step_id: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.id == step_id)
    }

    /// Whether `id` names one of this plan's steps.
    pub fn is_step(&self, id: &str) -> bool {
        self.step_index(id).is_some()
    }

    /// Returns the sub-task addressed by its owning step and its own id.
    pub fn sub_task(&self, step_id: &str, sub_task_id: &str) -> Option<&SubTask> {
        self.step(step_id)?
            .sub_tasks
            .iter()
            .find(|sub_task| sub_task.id == sub_task_id)
    }

    /// Iterates over every sub-task of every step, in order.
    pub fn sub_tasks(&self) -> impl Iterator<Item = &SubTask> {
        self.steps.iter().flat_map(|step| step.sub_tasks.iter())
    }

    /// Step ids in their current order.
    pub fn step_ids(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.id.as_str()).collect()
    }
}

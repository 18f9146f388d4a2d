//! In-memory holder of the active plan.
//!
//! [`PlanStore`] owns the single current [`Plan`] (or none). Every mutation
//! runs one of the pure functions in [`reducers`] and replaces the held value
//! with the result, so observers can detect changes by comparing plans.
//! Mutations on an absent plan are no-ops that return `None`.

use log::{debug, warn};

use crate::models::Plan;

pub mod reducers;


/// Holder of the active plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanStore {
    plan: Option<Plan>,
}

impl PlanStore {
    /// Creates a store holding `plan`.
    pub fn new(plan: Option<Plan>) -> Self {
        Self { plan }
    }

    /// The active plan, if any.
    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Whether a plan is active.
    pub fn is_active(&self) -> bool {
        self.plan.is_some()
    }

    /// Installs a new plan, replacing any current one.
    pub fn replace(&mut self, plan: Plan) -> &Plan {
        self.plan.insert(plan)
    }

    /// Flips the completion flag of a sub-task.
    pub fn toggle_sub_task(&mut self, step_id: &str, sub_task_id: &str) -> Option<&Plan> {
        self.apply(|plan| reducers::toggle_sub_task(plan, step_id, sub_task_id))
    }

    /// Replaces the text of a sub-task.
    pub fn edit_sub_task_text(
        &mut self,
        step_id: &str,
        sub_task_id: &str,
        text: &str,
    ) -> Option<&Plan> {
        self.apply(|plan| reducers::edit_sub_task_text(plan, step_id, sub_task_id, text))
    }

    /// Sets the time of a sub-task. The value is stored without validation.
    pub fn edit_sub_task_time(
        &mut self,
        step_id: &str,
        sub_task_id: &str,
        minutes: u32,
    ) -> Option<&Plan> {
        self.apply(|plan| reducers::edit_sub_task_time(plan, step_id, sub_task_id, minutes))
    }

    /// Moves step `active_id` to the position of step `over_id`.
    pub fn reorder_steps(&mut self, active_id: &str, over_id: &str) -> Option<&Plan> {
        self.apply(|plan| reducers::reorder_steps(plan, active_id, over_id))
    }

    /// Drops the active plan, returning it.
    pub fn reset(&mut self) -> Option<Plan> {
        debug!("Resetting plan store");
        self.plan.take()
    }

    fn apply<F>(&mut self, reducer: F) -> Option<&Plan>
    where
        F: FnOnce(&Plan) -> Plan,
    {
        let next = reducer(self.plan.as_ref()?);
        Some(self.plan.insert(next))
    }
}

/// Reads a sub-task time typed by the user.
///
/// Surrounding whitespace is ignored. Anything that is not a non-negative
/// integer gives 0; values beyond `u32::MAX` saturate.
pub fn parse_time_input(input: &str) -> u32 {
    let trimmed = input.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return trimmed.parse().unwrap_or(u32::MAX);
    }

    warn!("Invalid time input '{input}', using 0");
    0
}

//! Derived plan metrics.
//!
//! All functions here are pure projections of the current plan and are
//! recomputed on demand; nothing is cached on the plan itself.

use serde::Serialize;

use crate::models::{Plan, Step};


/// Sum of `time` over every sub-task of every step. 0 for an absent plan.
pub fn total_minutes(plan: Option<&Plan>) -> u64 {
    plan.map_or(0, |plan| plan.steps.iter().map(step_total).sum())
}

/// Sum of `time` over one step's sub-tasks.
pub fn step_total(step: &Step) -> u64 {
    step.sub_tasks
        .iter()
        .map(|sub_task| u64::from(sub_task.time))
        .sum()
}

/// Sum of `time` over the sub-tasks marked done.
pub fn completed_minutes(plan: &Plan) -> u64 {
    plan.sub_tasks()
        .filter(|sub_task| sub_task.done)
        .map(|sub_task| u64::from(sub_task.time))
        .sum()
}

/// Share of planned minutes that are done, rounded half-up to a whole
/// percent. 0 when nothing is planned.
pub fn progress_percent(plan: Option<&Plan>) -> u8 {
    let Some(plan) = plan else {
        return 0;
    };
    percent(completed_minutes(plan), total_minutes(Some(plan)))
}

fn percent(completed: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    // Integer half-up rounding of 100 * completed / total
    let scaled = (u128::from(completed) * 200 + u128::from(total)) / (u128::from(total) * 2);
    u8::try_from(scaled.min(100)).unwrap_or(100)
}

/// Formats minutes as `HHh MMm`, both fields zero-padded to two digits.
pub fn format_duration(total_minutes: u64) -> String {
    format!("{:02}h {:02}m", total_minutes / 60, total_minutes % 60)
}

/// Snapshot of every derived figure shown for a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMetrics {
    pub total_minutes: u64,
    pub completed_minutes: u64,
    pub progress: u8,
    /// Per-step totals in step order, keyed by step id
    pub step_totals: Vec<(String, u64)>,
}

impl PlanMetrics {
    /// Computes the metrics of `plan`; an absent plan yields all zeros.
    pub fn of(plan: Option<&Plan>) -> Self {
        let Some(plan) = plan else {
            return Self {
                total_minutes: 0,
                completed_minutes: 0,
                progress: 0,
                step_totals: Vec::new(),
            };
        };

        let total = total_minutes(Some(plan));
        let completed = completed_minutes(plan);
        Self {
            total_minutes: total,
            completed_minutes: completed,
            progress: percent(completed, total),
            step_totals: plan
                .steps
                .iter()
                .map(|step| (step.id.clone(), step_total(step)))
                .collect(),
        }
    }

    /// Whether every planned minute is done.
    pub fn is_complete(&self) -> bool {
        self.progress == 100
    }

    /// Total planned time formatted as `HHh MMm`.
    pub fn formatted_total(&self) -> String {
        format_duration(self.total_minutes)
    }
}

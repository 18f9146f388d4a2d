//! Pure plan reducers.
//!
//! Each reducer takes the current plan and returns a new one. Sequences that
//! contain a change are rebuilt; unknown ids leave the plan equal to its
//! input.

use crate::{
    models::{Plan, Step, SubTask},
    reorder::array_move,
};

/// Flips `done` on the addressed sub-task.
pub fn toggle_sub_task(plan: &Plan, step_id: &str, sub_task_id: &str) -> Plan {
    map_sub_task(plan, step_id, sub_task_id, |sub_task| SubTask {
        done: !sub_task.done,
        ..sub_task.clone()
    })
}

/// Replaces the `task` text verbatim.
pub fn edit_sub_task_text(plan: &Plan, step_id: &str, sub_task_id: &str, text: &str) -> Plan {
    map_sub_task(plan, step_id, sub_task_id, |sub_task| SubTask {
        task: text.to_string(),
        ..sub_task.clone()
    })
}

/// Stores `minutes` as the sub-task's time.
pub fn edit_sub_task_time(plan: &Plan, step_id: &str, sub_task_id: &str, minutes: u32) -> Plan {
    map_sub_task(plan, step_id, sub_task_id, |sub_task| SubTask {
        time: minutes,
        ..sub_task.clone()
    })
}

/// Moves the step `active_id` to the position currently held by `over_id`.
///
/// Dropping on itself, an `active_id` that is not a step (a sub-task drag),
/// or an `over_id` that is not a step leaves the order unchanged.
pub fn reorder_steps(plan: &Plan, active_id: &str, over_id: &str) -> Plan {
    if active_id == over_id {
        return plan.clone();
    }

    match (plan.step_index(active_id), plan.step_index(over_id)) {
        (Some(old_index), Some(new_index)) => Plan {
            project_name: plan.project_name.clone(),
            steps: array_move(&plan.steps, old_index, new_index),
        },
        _ => plan.clone(),
    }
}

fn map_sub_task<F>(plan: &Plan, step_id: &str, sub_task_id: &str, update: F) -> Plan
where
    F: Fn(&SubTask) -> SubTask,
{
    let steps = plan
        .steps
        .iter()
        .map(|step| {
            if step.id != step_id {
                return step.clone();
            }
            Step {
                id: step.id.clone(),
                title: step.title.clone(),
                sub_tasks: step
                    .sub_tasks
                    .iter()
                    .map(|sub_task| {
                        if sub_task.id == sub_task_id {
                            update(sub_task)
                        } else {
                            sub_task.clone()
                        }
                    })
                    .collect(),
            }
        })
        .collect();

    Plan {
        project_name: plan.project_name.clone(),
        steps,
    }
}

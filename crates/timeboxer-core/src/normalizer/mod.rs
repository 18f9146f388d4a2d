//! Conversion of untrusted generation output into a canonical [`Plan`].
//!
//! Everything the generation service returns passes through [`normalize`]
//! before it is stored. The normalizer never fails: a result that is not
//! plan-shaped is replaced by the fixed [`fallback_plan`], and individual
//! malformed `time` fields are coerced (see [`coerce_minutes`]).
//!
//! ```rust
//! use serde_json::json;
//! use timeboxer_core::normalizer::normalize;
//!
//! let raw = json!({
//!     "projectName": "Garden",
//!     "steps": [{
//!         "id": "s1",
//!         "title": "Prepare",
//!         "subTasks": [{ "id": "t1", "task": "Buy seeds", "time": "45", "done": false }]
//!     }]
//! });
//!
//! let plan = normalize(&raw);
//! assert_eq!(plan.steps[0].sub_tasks[0].time, 45);
//! ```

use log::{debug, warn};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    generation::GenerationError,
    models::{Plan, Step, SubTask},
};

mod coerce;
mod fallback;


pub use coerce::{coerce_minutes, DEFAULT_SUB_TASK_MINUTES};
pub use fallback::{fallback_plan, FALLBACK_PROJECT_NAME};

/// Reasons a raw generation result is rejected as a whole.
#[derive(Error, Debug, PartialEq, Eq)]
enum ShapeError {
    #[error("result is not a JSON object")]
    NotAnObject,
    #[error("`steps` is missing or not an array")]
    MissingSteps,
    #[error("step {index} is not an object")]
    StepNotAnObject { index: usize },
    #[error("`subTasks` of step {index} is not an array")]
    SubTasksNotAnArray { index: usize },
    #[error("sub-task {index} of step {step} is not an object")]
    SubTaskNotAnObject { step: usize, index: usize },
}

/// Normalizes a raw generation result, substituting the fallback plan when
/// the result is not plan-shaped.
pub fn normalize(raw: &Value) -> Plan {
    match try_normalize(raw) {
        Ok(plan) => {
            debug!(
                "Normalized generated plan '{}' with {} steps",
                plan.project_name,
                plan.steps.len()
            );
            plan
        }
        Err(reason) => {
            warn!("Generation result rejected ({reason}), using fallback plan");
            fallback_plan()
        }
    }
}

/// Normalizes the outcome of a generation call; any failure yields the
/// fallback plan.
pub fn normalize_result(result: Result<Value, GenerationError>) -> Plan {
    match result {
        Ok(raw) => normalize(&raw),
        Err(e) => {
            warn!("Plan generation failed ({e}), using fallback plan");
            fallback_plan()
        }
    }
}

fn try_normalize(raw: &Value) -> Result<Plan, ShapeError> {
    let object = raw.as_object().ok_or(ShapeError::NotAnObject)?;
    let steps = object
        .get("steps")
        .and_then(Value::as_array)
        .ok_or(ShapeError::MissingSteps)?;

    let steps = steps
        .iter()
        .enumerate()
        .map(|(index, step)| normalize_step(index, step))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Plan {
        project_name: text_field(object, "projectName"),
        steps,
    })
}

fn normalize_step(index: usize, raw: &Value) -> Result<Step, ShapeError> {
    let object = raw
        .as_object()
        .ok_or(ShapeError::StepNotAnObject { index })?;

    let sub_tasks = match object.get("subTasks") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(sub_index, item)| normalize_sub_task(index, sub_index, item))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(ShapeError::SubTasksNotAnArray { index }),
    };

    Ok(Step {
        id: id_field(object).unwrap_or_else(|| positional_id(format!("step{}", index + 1))),
        title: text_field(object, "title"),
        sub_tasks,
    })
}

fn normalize_sub_task(step: usize, index: usize, raw: &Value) -> Result<SubTask, ShapeError> {
    let object = raw
        .as_object()
        .ok_or(ShapeError::SubTaskNotAnObject { step, index })?;

    Ok(SubTask {
        id: id_field(object)
            .unwrap_or_else(|| positional_id(format!("st{}-{}", step + 1, index + 1))),
        task: text_field(object, "task"),
        time: coerce_minutes(object.get("time")),
        done: object.get("done").and_then(Value::as_bool).unwrap_or(false),
    })
}

/// Ids pass through unchanged; numeric ids keep their decimal form.
fn id_field(object: &Map<String, Value>) -> Option<String> {
    match object.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// Id for an item whose own `id` is missing or not a scalar, derived from
/// its 1-based position.
fn positional_id(id: String) -> String {
    warn!("Generated item has no usable id, assigning '{id}'");
    id
}

fn text_field(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

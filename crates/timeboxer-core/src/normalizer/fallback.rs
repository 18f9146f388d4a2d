//! The fixed plan used whenever generation fails or is malformed.

use crate::models::{Plan, Step, SubTask};

/// Project name of the fallback plan.
pub const FALLBACK_PROJECT_NAME: &str = "Project Plan (Demo Mode)";

/// Builds the deterministic demo plan: two steps with two sub-tasks each,
/// none of them done.
pub fn fallback_plan() -> Plan {
    Plan {
        project_name: FALLBACK_PROJECT_NAME.to_string(),
        steps: vec![
            Step {
                id: "step1".to_string(),
                title: "Initial Setup".to_string(),
                sub_tasks: vec![
                    SubTask::new("st1", "Install dependencies", 15),
                    SubTask::new("st2", "Configure environment", 30),
                ],
            },
            Step {
                id: "step2".to_string(),
                title: "Core Execution".to_string(),
                sub_tasks: vec![
                    SubTask::new("st3", "Develop main features", 240),
                    SubTask::new("st4", "Unit testing", 60),
                ],
            },
        ],
    }
}

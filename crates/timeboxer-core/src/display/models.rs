//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it through its terminal
//! renderer or print it as-is.

use std::fmt;

use crate::{
    metrics::{format_duration, step_total, PlanMetrics},
    models::{Plan, Step, SubTask},
};

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.project_name)?;
        writeln!(f)?;
        write!(f, "{}", PlanMetrics::of(Some(self)))?;

        if self.steps.is_empty() {
            return writeln!(f, "\nNo steps in this plan.");
        }

        for (index, step) in self.steps.iter().enumerate() {
            writeln!(f)?;
            step.fmt_step(f, Some(index + 1))?;
        }
        Ok(())
    }
}

impl Step {
    /// Formats the step as a level-two section, numbered when shown inside a
    /// plan.
    fn fmt_step(&self, f: &mut fmt::Formatter<'_>, position: Option<usize>) -> fmt::Result {
        match position {
            Some(position) => writeln!(f, "## {position}. {} `{}`", self.title, self.id)?,
            None => writeln!(f, "## {} `{}`", self.title, self.id)?,
        }
        writeln!(f)?;
        writeln!(f, "{} minutes total", step_total(self))?;
        writeln!(f)?;

        if self.sub_tasks.is_empty() {
            writeln!(f, "No sub-tasks.")?;
        }
        for sub_task in &self.sub_tasks {
            write!(f, "{sub_task}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_step(f, None)
    }
}

impl fmt::Display for SubTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.done { 'x' } else { ' ' };
        writeln!(
            f,
            "- [{mark}] {} ({} min) `{}`",
            self.task, self.time, self.id
        )
    }
}

impl fmt::Display for PlanMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **Total**: {} min ({})",
            self.total_minutes,
            format_duration(self.total_minutes)
        )?;
        writeln!(
            f,
            "- **Progress**: {}% ({} of {} min done)",
            self.progress, self.completed_minutes, self.total_minutes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::fallback_plan;

    #[test]
    fn test_plan_display() {
        let mut plan = fallback_plan();
        plan.steps[0].sub_tasks[0].done = true;
        let output = plan.to_string();

        assert!(output.starts_with("# Project Plan (Demo Mode)\n"));
        assert!(output.contains("- **Total**: 345 min (05h 45m)"));
        assert!(output.contains("- **Progress**: 4% (15 of 345 min done)"));
        assert!(output.contains("## 1. Initial Setup `step1`"));
        assert!(output.contains("## 2. Core Execution `step2`"));
        assert!(output.contains("45 minutes total"));
        assert!(output.contains("- [x] Install dependencies (15 min) `st1`"));
        assert!(output.contains("- [ ] Unit testing (60 min) `st4`"));
    }

    #[test]
    fn test_empty_plan_display() {
        let plan = Plan {
            project_name: "Empty".to_string(),
            steps: vec![],
        };
        let output = plan.to_string();
        assert!(output.contains("- **Total**: 0 min (00h 00m)"));
        assert!(output.contains("No steps in this plan."));
    }

    #[test]
    fn test_step_display_standalone() {
        let step = Step {
            id: "s9".to_string(),
            title: "Wrap up".to_string(),
            sub_tasks: vec![],
        };
        let output = step.to_string();
        assert!(output.starts_with("## Wrap up `s9`\n"));
        assert!(output.contains("0 minutes total"));
        assert!(output.contains("No sub-tasks."));
    }
}

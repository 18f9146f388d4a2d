//! The full view of the active plan.

use std::fmt;

use jiff::Timestamp;

use super::datetime::LocalDateTime;
use crate::{metrics::PlanMetrics, models::Plan};

/// Shown once every planned minute is done.
pub const COMPLETION_MESSAGE: &str = "You're ready to crush this goal!";

/// Plan, completion banner and save time, as printed by `tb show`.
///
/// # Examples
///
/// ```rust
/// use timeboxer_core::{display::PlanReport, normalizer::fallback_plan};
///
/// let plan = fallback_plan();
/// let output = PlanReport::new(&plan).to_string();
/// assert!(output.contains("Project Plan (Demo Mode)"));
/// assert!(!output.contains("crush this goal"));
/// ```
pub struct PlanReport<'a> {
    plan: &'a Plan,
    last_saved: Option<Timestamp>,
}

impl<'a> PlanReport<'a> {
    pub fn new(plan: &'a Plan) -> Self {
        Self {
            plan,
            last_saved: None,
        }
    }

    /// Adds the last-saved time to the footer.
    pub fn with_last_saved(mut self, last_saved: Option<Timestamp>) -> Self {
        self.last_saved = last_saved;
        self
    }
}

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plan)?;

        if PlanMetrics::of(Some(self.plan)).is_complete() {
            writeln!(f)?;
            writeln!(f, "> **All done!** {COMPLETION_MESSAGE}")?;
        }

        if let Some(saved) = self.last_saved {
            writeln!(f)?;
            writeln!(f, "_Last saved: {}_", LocalDateTime(saved))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{normalizer::fallback_plan, store::reducers::toggle_sub_task};

    #[test]
    fn test_banner_only_when_complete() {
        let plan = fallback_plan();
        assert!(!PlanReport::new(&plan).to_string().contains(COMPLETION_MESSAGE));

        let done = [("step1", "st1"), ("step1", "st2"), ("step2", "st3"), ("step2", "st4")]
            .into_iter()
            .fold(plan, |plan, (step, sub_task)| {
                toggle_sub_task(&plan, step, sub_task)
            });
        let output = PlanReport::new(&done).to_string();
        assert!(output.contains("100%"));
        assert!(output.contains(COMPLETION_MESSAGE));
    }

    #[test]
    fn test_last_saved_footer() {
        let plan = fallback_plan();
        let output = PlanReport::new(&plan)
            .with_last_saved(Some(Timestamp::UNIX_EPOCH))
            .to_string();
        assert!(output.contains("_Last saved: "));

        let output = PlanReport::new(&plan).with_last_saved(None).to_string();
        assert!(!output.contains("Last saved"));
    }
}

//! The interactive planning session.
//!
//! A [`Session`] is the single owner of the active plan. It ties together the
//! [`PlanStore`], the [`PersistenceAdapter`] and the generation input fields,
//! and guarantees that every successful mutation is followed by exactly one
//! save.
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  Generation  │──▶│  Normalizer  │──▶│  PlanStore   │──▶│ Persistence  │
//! │   service    │   │  / fallback  │   │  (reducers)  │   │   adapter    │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//!                                          ▲        │
//!                           ReorderEngine ─┘        └─▶ PlanMetrics
//! ```
//!
//! Saving is best-effort: a failed write is logged and the in-memory plan
//! keeps the change.
//!
//! # Examples
//!
//! ```rust
//! use timeboxer_core::{persistence::MemoryStore, Session};
//!
//! let session = Session::open(MemoryStore::default());
//! assert!(session.plan().is_none());
//! assert_eq!(session.metrics().progress, 0);
//! ```

use jiff::Timestamp;
use log::{info, warn};

use crate::{
    db::Database,
    error::{Result, TimeboxError},
    generation::{generate_plan, GenerationRequest, PlanGenerationService},
    metrics::PlanMetrics,
    models::Plan,
    normalizer::normalize,
    persistence::{KeyValueStore, PersistenceAdapter},
    reorder::{apply_drag_end, DragEnd},
    store::{parse_time_input, PlanStore},
};

pub mod builder;

#[cfg(test)]
mod tests;

pub use builder::SessionBuilder;

/// One user's planning session.
pub struct Session<S: KeyValueStore = Database> {
    store: PlanStore,
    persistence: PersistenceAdapter<S>,
    goal: String,
    duration: String,
    loading: bool,
}

impl<S: KeyValueStore> Session<S> {
    /// Opens a session over `store`, restoring the last saved plan.
    pub fn open(store: S) -> Self {
        let persistence = PersistenceAdapter::new(store);
        let plan = persistence.load();
        info!(
            "Session opened ({})",
            if plan.is_some() {
                "restored saved plan"
            } else {
                "no saved plan"
            }
        );

        Self {
            store: PlanStore::new(plan),
            persistence,
            goal: String::new(),
            duration: String::new(),
            loading: false,
        }
    }

    /// The active plan, if any.
    pub fn plan(&self) -> Option<&Plan> {
        self.store.plan()
    }

    /// Derived figures for the active plan.
    pub fn metrics(&self) -> PlanMetrics {
        PlanMetrics::of(self.plan())
    }

    /// When the plan was last persisted.
    pub fn last_saved(&self) -> Option<Timestamp> {
        self.persistence.last_saved()
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn set_goal(&mut self, goal: impl Into<String>) {
        self.goal = goal.into();
    }

    pub fn set_duration(&mut self, duration: impl Into<String>) {
        self.duration = duration.into();
    }

    /// Whether a generation request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The request built from the current input fields.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.goal.clone(), self.duration.clone())
    }

    /// Generates a plan from the input fields and makes it active.
    ///
    /// Service failures never surface here: they resolve to the fallback
    /// plan. The only error is a request made while another is outstanding.
    pub async fn generate(&mut self, service: &dyn PlanGenerationService) -> Result<&Plan> {
        let request = self.begin_loading()?;
        let plan = {
            let _loading = LoadingGuard(&mut self.loading);
            generate_plan(service, &request).await
        };
        Ok(self.install(plan))
    }

    /// Requests a plan from a remote endpoint and makes it active.
    ///
    /// A failed request is returned as [`TimeboxError::Generation`] and
    /// leaves the current plan untouched. A received body is normalized, so a
    /// malformed one still yields the fallback plan.
    pub async fn fetch(&mut self, service: &dyn PlanGenerationService) -> Result<&Plan> {
        let request = self.begin_loading()?;
        let result = {
            let _loading = LoadingGuard(&mut self.loading);
            service.generate(&request).await
        };

        let raw = result.map_err(|e| {
            warn!("Plan request failed, keeping current state: {e}");
            TimeboxError::from(e)
        })?;
        Ok(self.install(normalize(&raw)))
    }

    /// Flips the completion flag of a sub-task.
    pub fn toggle_sub_task(&mut self, step_id: &str, sub_task_id: &str) -> Option<&Plan> {
        let plan = self.store.toggle_sub_task(step_id, sub_task_id)?;
        persist(&mut self.persistence, plan);
        Some(plan)
    }

    /// Replaces the text of a sub-task verbatim.
    pub fn edit_sub_task_text(
        &mut self,
        step_id: &str,
        sub_task_id: &str,
        text: &str,
    ) -> Option<&Plan> {
        let plan = self.store.edit_sub_task_text(step_id, sub_task_id, text)?;
        persist(&mut self.persistence, plan);
        Some(plan)
    }

    /// Sets the time of a sub-task.
    pub fn edit_sub_task_time(
        &mut self,
        step_id: &str,
        sub_task_id: &str,
        minutes: u32,
    ) -> Option<&Plan> {
        let plan = self
            .store
            .edit_sub_task_time(step_id, sub_task_id, minutes)?;
        persist(&mut self.persistence, plan);
        Some(plan)
    }

    /// Sets the time of a sub-task from raw user input; input that is not a
    /// non-negative integer counts as 0.
    pub fn edit_sub_task_time_input(
        &mut self,
        step_id: &str,
        sub_task_id: &str,
        input: &str,
    ) -> Option<&Plan> {
        self.edit_sub_task_time(step_id, sub_task_id, parse_time_input(input))
    }

    /// Moves step `active_id` to the position of step `over_id`.
    pub fn reorder_steps(&mut self, active_id: &str, over_id: &str) -> Option<&Plan> {
        let plan = self.store.reorder_steps(active_id, over_id)?;
        persist(&mut self.persistence, plan);
        Some(plan)
    }

    /// Applies a finished reorder gesture.
    pub fn apply_drop(&mut self, end: &DragEnd) -> Option<&Plan> {
        let next = apply_drag_end(self.store.plan()?, end);
        persist(&mut self.persistence, &next);
        Some(self.store.replace(next))
    }

    /// Discards the plan, its saved copy and the input fields.
    pub fn reset(&mut self) {
        self.store.reset();
        if let Err(e) = self.persistence.clear() {
            warn!("Failed to clear saved plan: {e}");
        }
        self.goal.clear();
        self.duration.clear();
        info!("Session reset");
    }

    fn begin_loading(&mut self) -> Result<GenerationRequest> {
        if self.loading {
            return Err(TimeboxError::GenerationInProgress);
        }
        self.loading = true;
        Ok(self.request())
    }

    fn install(&mut self, plan: Plan) -> &Plan {
        persist(&mut self.persistence, &plan);
        self.store.replace(plan)
    }
}

/// Clears the loading flag when dropped, so a cancelled request future does
/// not leave the session stuck in the loading state.
struct LoadingGuard<'a>(&'a mut bool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

fn persist<S: KeyValueStore>(persistence: &mut PersistenceAdapter<S>, plan: &Plan) {
    if let Err(e) = persistence.save(plan) {
        warn!("Failed to save plan: {e}");
    }
}

//! Command execution against the active session.

use anyhow::{anyhow, bail, Context, Result};
use log::info;
use serde::Serialize;
use timeboxer_core::{
    generation::{ChatCompletionsService, EndpointClient},
    Plan, PlanMetrics, PlanReport, Session,
};

use crate::{
    cli::{EditArgs, GenerateArgs, MoveArgs, ResetArgs, ShowArgs, SubTaskRef, TimeArgs, ToggleArgs},
    renderer::TerminalRenderer,
};

const NO_PLAN: &str = "No plan yet. Run `tb generate <GOAL>` to create one.";

/// `tb show --json` output.
#[derive(Serialize)]
struct PlanSnapshot<'a> {
    plan: Option<&'a Plan>,
    metrics: PlanMetrics,
}

/// Runs commands against a session and renders the outcome.
pub struct App {
    session: Session,
    renderer: TerminalRenderer,
}

impl App {
    pub fn new(session: Session, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    pub async fn generate(&mut self, args: GenerateArgs) -> Result<()> {
        self.session.set_goal(args.goal);
        self.session.set_duration(args.duration);

        if let Some(url) = args.endpoint {
            let client = EndpointClient::new(&url).context("Failed to create endpoint client")?;
            info!("Requesting plan from {}", client.url());
            self.session
                .fetch(&client)
                .await
                .with_context(|| format!("Plan request to {} failed", client.url()))?;
        } else {
            let service = ChatCompletionsService::from_config(&args.provider.into())
                .context("Failed to configure plan provider")?;
            self.session.generate(&service).await?;
        }

        self.render_plan()
    }

    pub fn show(&self, args: &ShowArgs) -> Result<()> {
        if args.json {
            let snapshot = PlanSnapshot {
                plan: self.session.plan(),
                metrics: self.session.metrics(),
            };
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            return Ok(());
        }
        self.render_plan()
    }

    pub fn toggle(&mut self, args: &ToggleArgs) -> Result<()> {
        let target = &args.target;
        self.ensure_sub_task(target)?;
        self.session
            .toggle_sub_task(&target.step_id, &target.sub_task_id);
        self.render_plan()
    }

    pub fn edit(&mut self, args: &EditArgs) -> Result<()> {
        let target = &args.target;
        self.ensure_sub_task(target)?;
        self.session
            .edit_sub_task_text(&target.step_id, &target.sub_task_id, &args.text);
        self.render_plan()
    }

    pub fn time(&mut self, args: &TimeArgs) -> Result<()> {
        let target = &args.target;
        self.ensure_sub_task(target)?;
        self.session
            .edit_sub_task_time_input(&target.step_id, &target.sub_task_id, &args.minutes);
        self.render_plan()
    }

    pub fn move_step(&mut self, args: &MoveArgs) -> Result<()> {
        let plan = self.session.plan().ok_or_else(|| anyhow!(NO_PLAN))?;
        for id in [&args.active_id, &args.over_id] {
            if !plan.is_step(id) {
                bail!("'{id}' is not a step; only steps can be moved");
            }
        }

        self.session.reorder_steps(&args.active_id, &args.over_id);
        self.render_plan()
    }

    pub fn reset(&mut self, args: &ResetArgs) -> Result<()> {
        if !args.confirm {
            bail!("Reset discards the current plan; pass --confirm to proceed");
        }
        self.session.reset();
        self.renderer.render("Plan discarded.\n")
    }

    fn ensure_sub_task(&self, target: &SubTaskRef) -> Result<()> {
        let plan = self.session.plan().ok_or_else(|| anyhow!(NO_PLAN))?;
        if plan.sub_task(&target.step_id, &target.sub_task_id).is_none() {
            bail!(
                "No sub-task '{}' in step '{}'",
                target.sub_task_id,
                target.step_id
            );
        }
        Ok(())
    }

    fn render_plan(&self) -> Result<()> {
        match self.session.plan() {
            Some(plan) => {
                let report = PlanReport::new(plan).with_last_saved(self.session.last_saved());
                self.renderer.render(&report.to_string())
            }
            None => self.renderer.render(&format!("{NO_PLAN}\n")),
        }
    }
}

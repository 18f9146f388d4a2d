use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    EditArgs, GenerateArgs, MoveArgs, ResetArgs, ServeArgs, ShowArgs, TimeArgs, ToggleArgs,
};

/// Time-boxed planning from the terminal
///
/// Timeboxer breaks a goal and a total time budget into steps and sub-tasks,
/// each with its own estimate in minutes. The plan is saved locally after
/// every change, so progress carries over between runs. Running `tb` without
/// a command shows the current plan.
#[derive(Parser)]
#[command(version, about, name = "tb")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/timeboxer/timeboxer.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Timeboxer CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new plan, replacing the current one
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Show the current plan and its progress
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Check or uncheck a sub-task
    #[command(alias = "t")]
    Toggle(ToggleArgs),
    /// Replace the text of a sub-task
    #[command(alias = "e")]
    Edit(EditArgs),
    /// Change the time estimate of a sub-task
    Time(TimeArgs),
    /// Move a step to the position of another step
    #[command(alias = "mv")]
    Move(MoveArgs),
    /// Discard the current plan
    Reset(ResetArgs),
    /// Serve the plan generation endpoint over HTTP
    Serve(ServeArgs),
}

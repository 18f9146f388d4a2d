//! Timeboxer CLI Application
//!
//! Command-line interface for generating and tracking time-boxed plans.

mod args;
mod cli;
mod commands;
mod renderer;
mod serve;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use commands::App;
use log::info;
use renderer::TerminalRenderer;
use timeboxer_core::{generation::ChatCompletionsService, SessionBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let command = match command {
        Some(Serve(args)) => {
            let service = ChatCompletionsService::from_config(&args.provider.into())
                .context("Failed to configure plan provider")?;
            info!("Starting generation endpoint");
            return serve::run_serve(Arc::new(service), args.addr).await;
        }
        other => other,
    };

    let session = SessionBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to open session")?;

    let mut app = App::new(session, TerminalRenderer::new(!no_color));

    info!("Timeboxer started");

    match command {
        Some(Generate(args)) => app.generate(args).await,
        Some(Show(args)) => app.show(&args),
        Some(Toggle(args)) => app.toggle(&args),
        Some(Edit(args)) => app.edit(&args),
        Some(Time(args)) => app.time(&args),
        Some(Move(args)) => app.move_step(&args),
        Some(Reset(args)) => app.reset(&args),
        Some(Serve(_)) | None => app.show(&cli::ShowArgs { json: false }),
    }
}

//! HTTP plan generation endpoint.

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{extract::State, routing::post, Json, Router};
use log::info;
use serde_json::Value;
use timeboxer_core::{
    generation::{endpoint_response, GENERATE_PATH},
    GenerationRequest, PlanGenerationService,
};
use tokio::net::TcpListener;

type SharedService = Arc<dyn PlanGenerationService>;

pub fn build_router(service: SharedService) -> Router {
    Router::new()
        .route(GENERATE_PATH, post(generate))
        .with_state(service)
}

/// Answers with the provider's document, or the fallback plan when the
/// provider fails. Never an error status once the body has parsed.
async fn generate(
    State(service): State<SharedService>,
    Json(request): Json<GenerationRequest>,
) -> Json<Value> {
    Json(endpoint_response(service.as_ref(), &request).await)
}

pub async fn run_serve(service: SharedService, addr: SocketAddr) -> Result<()> {
    let app = build_router(service);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Serving POST {GENERATE_PATH} on http://{addr}");
    println!("Listening on http://{addr}{GENERATE_PATH}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}

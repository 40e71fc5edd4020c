use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use plantarium_http::{create_router, AppState};
use plantarium_service::PlantService;

pub(crate) async fn run(port: u16, host: String, db_path: Option<PathBuf>) -> Result<()> {
    let storage = Arc::new(super::open_storage(db_path).await?);
    let plants = Arc::new(PlantService::new(storage));

    // Seed to completion before binding so no request observes a
    // partially-populated catalog. A failure degrades to a warning.
    if let Err(e) = plants.seed_baseline().await {
        tracing::warn!(error = %e, "baseline seeding failed, serving without it");
    }

    let state = Arc::new(AppState { plants });
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

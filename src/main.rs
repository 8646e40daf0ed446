use anyhow::Context;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use crate::settings::SETTINGS;
mod catalog;
mod controllers;
mod error;
mod models;
mod routers;
mod settings;
use catalog::Catalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(false)
        .init();

    let catalog = Catalog::seeded();
    info!("🎵 Catalog seeded with {} songs", catalog.list().await.len());

    let addr = SETTINGS.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    let app = routers::app(catalog);

    info!("🎧 Server listening on port {}", SETTINGS.port);
    info!("📡 Music API endpoints: /api/test, /api/music/*");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

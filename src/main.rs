//! Main application entry point (CLI binary).
//!
//! Thin wrapper around the `whereami` library:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Wiring the resolver pipeline, image service, and HTTP server

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use whereami::config::{Config, Opt};
use whereami::image::{resolve_search_config, ImageLookupService};
use whereami::initialization::{init_client, init_logger_with};
use whereami::location::{LocationCache, LocationOutcome, LocationPipeline};
use whereami::server::{app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists). Lets
    // SEARCH_CX / SEARCH_KEY / PORT be set without exporting them manually.
    let _ = dotenvy::dotenv();

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = init_client(&config).context("Failed to initialize HTTP client")?;

    // Both of these are per-process decisions: search credentials are read
    // once at startup, and the location pipeline result is cached for the
    // server's lifetime.
    let search_config = resolve_search_config(&client, &config).await;
    let location = Arc::new(LocationCache::new(LocationPipeline::for_config(
        &client, &config,
    )));

    match location.get().await {
        LocationOutcome::Resolved(geo) => info!("serving from {}", geo.search_string()),
        LocationOutcome::Unknown => warn!("could not determine location at startup"),
    }

    let state = AppState {
        location,
        images: Arc::new(ImageLookupService::new(
            client.clone(),
            config.custom_search_base_url.clone(),
            search_config,
        )),
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}

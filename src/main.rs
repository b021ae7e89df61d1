// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity Finder API Server
//!
//! Serves filtered views of the activity catalog fetched from the activity
//! backend, plus per-user bookmarks.

use activity_finder::{
    config::Config,
    models::Taxonomy,
    services::{CatalogService, FavoritesService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Activity Finder API");

    // Load taxonomy
    let taxonomy = match &config.taxonomy_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading taxonomy");
            Taxonomy::load_from_file(path)?
        }
        None => Taxonomy::default(),
    };

    // Fetch the baseline once. A failed fetch leaves an empty catalog that
    // can be refreshed later.
    let catalog = CatalogService::new(&config.catalog_url)?;
    match catalog.refresh().await {
        Ok(count) => tracing::info!(count = ?count, "Catalog loaded"),
        Err(e) => tracing::warn!(error = %e, "Initial catalog fetch failed"),
    }

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        taxonomy: Arc::new(taxonomy),
        catalog,
        favorites: FavoritesService::new(),
    });

    // Build router
    let app = activity_finder::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("activity_finder=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}

//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream client, loads fallback places and runs the Axum
//! server until shutdown.

use crate::config::Config;
use crate::domain::entities::Place;
use crate::infrastructure::fallback::load_places;
use crate::infrastructure::http::HttpContentRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The render settings are invalid
/// - Server bind fails
/// - Server runtime error occurs
///
/// A missing or unreadable fallback places file is logged and skipped.
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(HttpContentRepository::new(&config.api_base_url));
    tracing::info!("Upstream API at {}", repository.base_url());

    let fallback = fallback_places(&config);
    let state = AppState::new(&config, repository, fallback)?;

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn fallback_places(config: &Config) -> Vec<Place> {
    let Some(path) = &config.fallback_places_path else {
        return Vec::new();
    };
    match load_places(path) {
        Ok(places) => {
            tracing::info!("Loaded {} fallback places", places.len());
            places
        }
        Err(e) => {
            tracing::warn!("Fallback places unavailable: {:#}", e);
            Vec::new()
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutting down");
}

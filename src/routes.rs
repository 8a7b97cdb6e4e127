//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`        - Health check: upstream API, fallback places
//! - `/fragments/*`        - Page hydrations
//! - `/forms/*`            - Post form submission and wiring
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Body limit** - Raised for image uploads on `/forms`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Largest accepted form submission, image included.
pub const MAX_FORM_BYTES: usize = 10 * 1024 * 1024;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let forms = api::routes::form_routes().layer(DefaultBodyLimit::max(MAX_FORM_BYTES));

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/fragments", api::routes::fragment_routes())
        .nest("/forms", forms)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

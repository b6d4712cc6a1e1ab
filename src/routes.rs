//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                     - Service name, version and health link
//! - `GET  /health`               - Health check
//! - `{API_PREFIX}/*`             - Shorten, redirect and info (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin access
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, root_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path normalization.
pub fn build_router(state: AppState) -> Router {
    let api_prefix = state.service_info.api_prefix.clone();

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .nest(&api_prefix, api::routes::api_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application router served by the HTTP server.
///
/// Trailing slashes are trimmed before routing, so `/api/v1/info/abc/`
/// resolves like `/api/v1/info/abc`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

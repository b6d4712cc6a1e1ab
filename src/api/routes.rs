//! API route configuration.

use crate::api::handlers::{info_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL routes, mounted under the configured API prefix.
///
/// # Endpoints
///
/// - `POST /shorten`            - Create a short URL
/// - `GET  /info/{short_code}`  - Mapping details and access statistics
/// - `GET  /{short_code}`       - Redirect to the original URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/info/{short_code}", get(info_handler))
        .route("/{short_code}", get(redirect_handler))
}

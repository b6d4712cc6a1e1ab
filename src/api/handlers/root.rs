//! Handler for the service root.

use axum::{Json, extract::State};

use crate::api::dto::root::RootResponse;
use crate::state::AppState;

/// Identifies the service.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler(State(state): State<AppState>) -> Json<RootResponse> {
    let info = &state.service_info;

    Json(RootResponse {
        name: info.project_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        health: format!("{}/health", info.base_url.trim_end_matches('/')),
    })
}

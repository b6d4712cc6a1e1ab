//! Handler for short URL details.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::info::InfoResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a mapping with its access statistics. Never counts as an access.
///
/// # Endpoint
///
/// `GET {API_PREFIX}/info/{short_code}`
///
/// # Response
///
/// ```json
/// {
///   "short_code": "abc123",
///   "short_url": "http://localhost:8000/abc123",
///   "original_url": "http://example.com",
///   "created_at": "2024-09-01T12:00:00Z",
///   "last_accessed": null,
///   "access_count": 0
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn info_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<InfoResponse>, AppError> {
    let service = &state.mapping_service;
    let mapping = service.get_mapping(&short_code).await?;

    Ok(Json(InfoResponse {
        short_url: service.short_url(&mapping.short_code),
        short_code: mapping.short_code,
        original_url: mapping.original_url,
        created_at: mapping.created_at,
        last_accessed: mapping.last_accessed,
        access_count: mapping.access_count,
    }))
}

//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use tracing::info;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST {API_PREFIX}/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com", "custom_code": "mycode" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "short_code": "mycode",
///   "short_url": "http://localhost:8000/mycode",
///   "original_url": "http://example.com"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body, URL or custom code.
/// Returns 500 Internal Server Error if the custom code is taken or the database fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(mut payload) = payload?;
    // An empty custom code means "generate one".
    payload.custom_code = payload.custom_code.filter(|code| !code.is_empty());
    payload.validate()?;

    let service = &state.mapping_service;
    let mapping = service
        .create_mapping(&payload.url, payload.custom_code)
        .await?;

    info!(short_code = %mapping.short_code, "Short URL created");

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: service.short_url(&mapping.short_code),
            short_code: mapping.short_code,
            original_url: mapping.original_url,
        }),
    ))
}

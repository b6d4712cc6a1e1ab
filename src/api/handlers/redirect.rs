//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET {API_PREFIX}/{short_code}`
///
/// # Request Flow
///
/// 1. Look up the mapping (404 if absent)
/// 2. Record the access: `access_count + 1`, `last_accessed = now`
/// 3. Return 307 Temporary Redirect to the original URL
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if the lookup or the statistics update fails.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let mapping = state.mapping_service.resolve(&short_code).await?;

    debug!(short_code = %short_code, target = %mapping.original_url, "Redirecting");

    Ok(Redirect::temporary(&mapping.original_url))
}

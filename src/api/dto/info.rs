//! DTOs for the info endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Full details of a mapping, including access statistics.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub last_accessed: Option<DateTime<Utc>>,
    pub access_count: i64,
}

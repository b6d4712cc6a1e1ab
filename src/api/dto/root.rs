//! DTO for the root endpoint.

use serde::Serialize;

/// Service identification returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    /// Absolute URL of the health endpoint.
    pub health: String,
}

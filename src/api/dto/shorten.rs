//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::code_generator::CUSTOM_CODE_REGEX;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL. `http://` is prepended when no scheme is given.
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,

    /// Optional caller-chosen short code.
    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = *CUSTOM_CODE_REGEX, message = "Invalid characters in custom code"))]
    pub custom_code: Option<String>,
}

/// Created short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
}

//! Cross-origin resource sharing policy.

use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS: any origin, method and header.
///
/// Browser clients on other origins may call the API directly. Credentials
/// are not allowed, since `Any` origins cannot be combined with them.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

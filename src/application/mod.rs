//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers.
//!
//! - [`services::mapping_service::MappingService`] - Short URL creation, lookup and access tracking

pub mod services;

//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters.
//!
//! # Repositories
//!
//! - [`PgMappingRepository`] - URL mapping storage, lookup and access statistics

pub mod pg_mapping_repository;

pub use pg_mapping_repository::PgMappingRepository;

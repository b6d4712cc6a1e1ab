//! Core domain entities.
//!
//! The service has a single entity, [`UrlMapping`], plus [`NewMapping`] which
//! carries the caller-controlled fields for an insert.

pub mod mapping;

pub use mapping::{NewMapping, UrlMapping};

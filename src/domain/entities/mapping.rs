//! URL mapping entity: a short code bound to its original URL and access statistics.

use chrono::{DateTime, Utc};

/// A persisted short code → URL mapping.
///
/// `short_code` and `original_url` never change after creation; only
/// `access_count` and `last_accessed` move, and only on redirects.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlMapping {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub last_accessed: Option<DateTime<Utc>>,
    pub access_count: i64,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        last_accessed: Option<DateTime<Utc>>,
        access_count: i64,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            created_at,
            last_accessed,
            access_count,
        }
    }
}

/// Input data for inserting a new mapping.
///
/// The store assigns `id` and `created_at`; statistics start at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMapping {
    pub short_code: String,
    pub original_url: String,
}

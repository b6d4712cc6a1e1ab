//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL mappings.
///
/// Uniqueness of `short_code` and atomicity of the access counter are the
/// store's responsibility; implementations must not emulate them in memory.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a mapping unless its short code is already taken.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` with store-assigned `id` and `created_at`
    /// - `Ok(None)` if another mapping already owns `short_code`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors. The insert is rolled back.
    async fn try_insert(&self, new_mapping: NewMapping) -> Result<Option<UrlMapping>, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Increments `access_count` and bumps `last_accessed` in one transaction.
    ///
    /// Returns `Ok(false)` if no mapping matched `short_code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors. Nothing is persisted on failure.
    async fn record_access(&self, short_code: &str) -> Result<bool, AppError>;

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] when the connection check fails.
    async fn ping(&self) -> Result<(), AppError>;
}

//! URL mapping creation, lookup and access tracking.

use std::sync::Arc;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::code_generator::{ALPHABET, generate_code_with, validate_custom_code};
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;
use tracing::{debug, warn};

/// Upper bound on generated candidates per create before giving up.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Service for creating and resolving short URL mappings.
///
/// Handles URL normalization, custom code validation, and collision-free
/// code generation on top of a [`MappingRepository`].
pub struct MappingService {
    repository: Arc<dyn MappingRepository>,
    base_url: String,
    code_length: usize,
    alphabet: &'static [u8],
}

impl MappingService {
    /// Creates a new mapping service.
    ///
    /// `base_url` prefixes every short URL; `code_length` sets the size of generated codes.
    pub fn new(
        repository: Arc<dyn MappingRepository>,
        base_url: impl Into<String>,
        code_length: usize,
    ) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
            code_length,
            alphabet: ALPHABET,
        }
    }

    /// Overrides the symbols used for generated codes.
    pub fn with_alphabet(mut self, alphabet: &'static [u8]) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Creates a new mapping for `original_url`.
    ///
    /// # Code Selection
    ///
    /// - A non-empty `custom_code` is validated for shape and inserted as-is
    /// - Otherwise a random code of the configured length is generated; a candidate
    ///   that already exists, or loses an insert race, is discarded and a new one drawn,
    ///   up to [`MAX_CODE_ATTEMPTS`] times
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom code is malformed.
    /// Returns [`AppError::Database`] if the custom code is taken or the store fails.
    /// Returns [`AppError::Internal`] if every generated candidate collided.
    pub async fn create_mapping(
        &self,
        original_url: &str,
        custom_code: Option<String>,
    ) -> Result<UrlMapping, AppError> {
        let original_url = normalize_url(original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(custom) = custom_code.filter(|code| !code.is_empty()) {
            validate_custom_code(&custom)?;

            let new_mapping = NewMapping {
                short_code: custom.clone(),
                original_url,
            };

            return self.repository.try_insert(new_mapping).await?.ok_or_else(|| {
                AppError::database(
                    "Short code already exists",
                    json!({ "short_code": custom }),
                )
            });
        }

        self.create_with_generated_code(original_url).await
    }

    /// Retrieves a mapping by its short code without touching its statistics.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping matches.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn get_mapping(&self, short_code: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_code": short_code }))
            })
    }

    /// Counts one access against the mapping.
    ///
    /// A code with no mapping at update time is ignored; mappings are never
    /// deleted, so this only happens if a caller skips the lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn record_access(&self, short_code: &str) -> Result<(), AppError> {
        if !self.repository.record_access(short_code).await? {
            warn!(short_code, "Access recorded for unknown short code");
        }
        Ok(())
    }

    /// Resolves a short code for redirection and records the access.
    ///
    /// The lookup must succeed before statistics are touched. The returned
    /// mapping reflects the state read before this access was counted.
    ///
    /// # Errors
    ///
    /// See [`Self::get_mapping`] and [`Self::record_access`].
    pub async fn resolve(&self, short_code: &str) -> Result<UrlMapping, AppError> {
        let mapping = self.get_mapping(short_code).await?;
        self.record_access(short_code).await?;
        Ok(mapping)
    }

    /// Builds the fully-qualified short URL for a code.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), short_code)
    }

    /// Returns the number of stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] when the store is unavailable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    async fn create_with_generated_code(
        &self,
        original_url: String,
    ) -> Result<UrlMapping, AppError> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = generate_code_with(self.alphabet, self.code_length);

            if self.repository.find_by_code(&code).await?.is_some() {
                debug!(attempt, "Generated short code already exists, retrying");
                continue;
            }

            let new_mapping = NewMapping {
                short_code: code,
                original_url: original_url.clone(),
            };

            match self.repository.try_insert(new_mapping).await? {
                Some(mapping) => return Ok(mapping),
                None => debug!(attempt, "Generated short code taken concurrently, retrying"),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique short code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }
}

//! Short code generation and validation utilities.
//!
//! Generated codes double as unguessable identifiers, so they are drawn from
//! `rand::rng()`, a CSPRNG seeded from the operating system.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Symbols used for generated codes: A-Z, a-z, 0-9.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Longest custom code accepted from callers.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 64;

/// Path segments that would shadow API routes if used as short codes.
const RESERVED_CODES: &[&str] = &["shorten", "info", "health"];

/// Characters allowed in a custom code.
pub static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("custom code regex is valid"));

/// Generates a random short code of `length` alphanumeric characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    generate_code_with(ALPHABET, length)
}

/// Generates a random code of `length` symbols drawn uniformly from `alphabet`.
///
/// `alphabet` must be non-empty ASCII.
pub fn generate_code_with(alphabet: &[u8], length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..alphabet.len());
            alphabet[idx] as char
        })
        .collect()
}

/// Validates a caller-supplied custom short code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-`, `_`
/// - Cannot be a reserved route segment
///
/// Uniqueness is not checked here; the store enforces it on insert.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::bad_request(
            format!("Custom code must be 1-{MAX_CUSTOM_CODE_LENGTH} characters"),
            json!({ "provided_length": code.len() }),
        ));
    }

    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens and underscores",
            json!({ "custom_code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "custom_code": code }),
        ));
    }

    Ok(())
}

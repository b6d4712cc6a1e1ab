//! URL normalization for submitted long URLs.
//!
//! The stored URL is the caller's string with an explicit scheme: `http://`
//! is prepended when neither `http://` nor `https://` is present, and URLs
//! that already carry one of them are kept byte for byte.

use axum::http::HeaderValue;
use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Prepends `http://` unless the URL already starts with `http://` or `https://`.
///
/// The scheme check ignores ASCII case.
pub fn ensure_scheme(input: &str) -> String {
    if has_http_scheme(input) {
        input.to_string()
    } else {
        format!("http://{input}")
    }
}

/// Validates a submitted URL and returns the form to store.
///
/// # Errors
///
/// - [`UrlNormalizationError::Empty`] for an empty string
/// - [`UrlNormalizationError::UnsupportedProtocol`] for explicit non-HTTP schemes like `ftp://`
/// - [`UrlNormalizationError::InvalidFormat`] for whitespace, control characters,
///   non-ASCII or unparseable input
/// - [`UrlNormalizationError::MissingHost`] when no host remains after parsing
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("example.com").unwrap(), "http://example.com");
/// assert_eq!(normalize_url("https://a.com/X?y#z").unwrap(), "https://a.com/X?y#z");
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    if input.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(UrlNormalizationError::InvalidFormat(
            "URL must not contain whitespace or control characters".to_string(),
        ));
    }

    if let Some((scheme, _)) = input.split_once("://")
        && is_scheme_like(scheme)
        && !has_http_scheme(input)
    {
        return Err(UrlNormalizationError::UnsupportedProtocol);
    }

    let normalized = ensure_scheme(input);

    let parsed =
        Url::parse(&normalized).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    // Stored as-is, so it must be usable verbatim as a `Location` header.
    if HeaderValue::from_str(&normalized).is_err() {
        return Err(UrlNormalizationError::InvalidFormat(
            "URL must be ASCII; percent-encode other characters".to_string(),
        ));
    }

    Ok(normalized)
}

fn has_http_scheme(input: &str) -> bool {
    let lower = input
        .get(..8)
        .unwrap_or(input)
        .to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn is_scheme_like(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepends_http_without_scheme() {
        assert_eq!(normalize_url("example.com").unwrap(), "http://example.com");
    }

    #[test]
    fn test_prepends_http_to_path_and_query() {
        assert_eq!(
            normalize_url("example.com/path?q=1").unwrap(),
            "http://example.com/path?q=1"
        );
    }

    #[test]
    fn test_keeps_http_unchanged() {
        assert_eq!(
            normalize_url("http://example.com").unwrap(),
            "http://example.com"
        );
    }

    #[test]
    fn test_keeps_https_unchanged() {
        assert_eq!(normalize_url("https://a.com").unwrap(), "https://a.com");
    }

    #[test]
    fn test_does_not_canonicalize() {
        let input = "https://EXAMPLE.COM:443/Path?key=VALUE#anchor";
        assert_eq!(normalize_url(input).unwrap(), input);
    }

    #[test]
    fn test_uppercase_scheme_is_recognized() {
        assert_eq!(
            normalize_url("HTTPS://example.com").unwrap(),
            "HTTPS://example.com"
        );
    }

    #[test]
    fn test_localhost_with_port() {
        assert_eq!(
            normalize_url("localhost:3000/test").unwrap(),
            "http://localhost:3000/test"
        );
    }

    #[test]
    fn test_ip_address() {
        assert_eq!(
            normalize_url("192.168.1.1:8080/api").unwrap(),
            "http://192.168.1.1:8080/api"
        );
    }

    #[test]
    fn test_empty_string() {
        assert!(matches!(
            normalize_url(""),
            Err(UrlNormalizationError::Empty)
        ));
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(matches!(
            normalize_url("not a valid url"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
        assert!(matches!(
            normalize_url("https://example.com "),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_control_characters_rejected() {
        for input in ["example.com/a\u{1}b", "https://example.com/\u{7f}", "a.com/\u{0}"] {
            assert!(
                matches!(
                    normalize_url(input),
                    Err(UrlNormalizationError::InvalidFormat(_))
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(matches!(
            normalize_url("https://example.com/caf\u{e9}"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
        assert_eq!(
            normalize_url("https://example.com/caf%C3%A9").unwrap(),
            "https://example.com/caf%C3%A9"
        );
    }

    #[test]
    fn test_accepted_urls_are_valid_location_headers() {
        for input in ["example.com", "https://a.com/X?y=1#z", "localhost:3000/test"] {
            let url = normalize_url(input).unwrap();
            assert!(HeaderValue::from_str(&url).is_ok());
        }
    }

    #[test]
    fn test_ftp_protocol() {
        assert!(matches!(
            normalize_url("ftp://example.com/file.txt"),
            Err(UrlNormalizationError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_file_protocol() {
        assert!(matches!(
            normalize_url("file:///home/user/document.txt"),
            Err(UrlNormalizationError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_javascript_protocol() {
        assert!(normalize_url("javascript:alert('xss')").is_err());
    }

    #[test]
    fn test_missing_host() {
        assert!(normalize_url("http://").is_err());
        assert!(normalize_url("https://").is_err());
    }

    #[test]
    fn test_ensure_scheme() {
        assert_eq!(ensure_scheme("a.com"), "http://a.com");
        assert_eq!(ensure_scheme("http://a.com"), "http://a.com");
        assert_eq!(ensure_scheme("https://a.com"), "https://a.com");
    }

    #[test]
    fn test_very_long_url() {
        let url = format!("https://example.com/{}", "a".repeat(2000));
        assert_eq!(normalize_url(&url).unwrap(), url);
    }
}

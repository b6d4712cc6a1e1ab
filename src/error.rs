//! Application error type and its HTTP representation.
//!
//! Every fallible operation in the service resolves to one [`AppError`] kind.
//! Handlers return `Result<_, AppError>` and axum renders the error through
//! [`IntoResponse`] as:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short URL not found", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Error kinds surfaced by the service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed client input, rejected before touching the database.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The requested short code has no mapping.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The database rejected or failed an operation. The cause is logged, not returned.
    #[error("{message}")]
    Database { message: String, details: Value },

    /// Anything else, e.g. exhausted short code generation attempts.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn database(message: impl Into<String>, details: Value) -> Self {
        Self::Database {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status used when this error reaches a client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Database { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Database { message, details } => ("database_error", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database operation failed");
        AppError::database("Database error occurred", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(&e).unwrap_or_default(),
        )
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::bad_request("Invalid request body", json!({ "reason": e.body_text() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("bad", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("missing", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::database("db", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::internal("boom", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_info_codes() {
        let info = AppError::not_found("Short URL not found", json!({ "short_code": "abc" }))
            .to_error_info();
        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "Short URL not found");
        assert_eq!(info.details["short_code"], "abc");

        let info = AppError::database("Database error occurred", json!({})).to_error_info();
        assert_eq!(info.code, "database_error");
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::bad_request("Custom code is reserved", json!({}));
        assert_eq!(err.to_string(), "Custom code is reserved");
    }

    #[test]
    fn test_sqlx_error_is_opaque() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Database { .. }));
        assert_eq!(err.to_error_info().details, json!({}));
    }
}

//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: Database unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 42 mappings" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let healthy = db_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database: db_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity and reports the number of stored mappings.
async fn check_database(state: &AppState) -> CheckStatus {
    let service = &state.mapping_service;
    let result = match service.ping().await {
        Ok(()) => service.count().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Connected, {} mappings", count)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Database error: {}", e)),
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::api::handlers::test_support::test_server;
    use crate::domain::repositories::MockMappingRepository;
    use crate::error::AppError;
    use serde_json::json;

    #[tokio::test]
    async fn test_health_ok() {
        let mut mock = MockMappingRepository::new();
        mock.expect_ping().times(1).returning(|| Ok(()));
        mock.expect_count().returning(|| Ok(3));

        let server = test_server(mock);
        let response = server.get("/health").await;

        response.assert_status_ok();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["checks"]["database"]["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(json["checks"]["database"]["message"], "Connected, 3 mappings");
    }

    #[tokio::test]
    async fn test_health_degraded() {
        let mut mock = MockMappingRepository::new();
        mock.expect_ping()
            .times(1)
            .returning(|| Err(AppError::database("Database error occurred", json!({}))));
        mock.expect_count().times(0);

        let server = test_server(mock);
        let response = server.get("/health").await;

        assert_eq!(response.status_code(), 503);
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["checks"]["database"]["status"], "error");
    }
}

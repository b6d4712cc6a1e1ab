#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use link_shortener::application::services::MappingService;
use link_shortener::infrastructure::persistence::PgMappingRepository;
use link_shortener::routes::build_router;
use link_shortener::state::{AppState, ServiceInfo};

pub const BASE_URL: &str = "http://localhost:8000";

pub async fn insert_mapping(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO url_mappings (short_code, original_url) VALUES ($1, $2) RETURNING id",
    )
    .bind(code)
    .bind(url)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn access_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT access_count FROM url_mappings WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_service(pool: PgPool) -> Arc<MappingService> {
    let repository = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    Arc::new(MappingService::new(repository, BASE_URL, 6))
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        create_test_service(pool),
        ServiceInfo {
            project_name: "URL Shortener".to_string(),
            base_url: BASE_URL.to_string(),
            api_prefix: "/api/v1".to_string(),
        },
    )
}

pub fn create_test_server(pool: PgPool) -> TestServer {
    TestServer::new(build_router(create_test_state(pool))).unwrap()
}

mod common;

use sqlx::PgPool;
use std::sync::Arc;
use link_shortener::domain::entities::NewMapping;
use link_shortener::domain::repositories::MappingRepository;
use link_shortener::infrastructure::persistence::PgMappingRepository;

fn new_mapping(code: &str, url: &str) -> NewMapping {
    NewMapping {
        short_code: code.to_string(),
        original_url: url.to_string(),
    }
}

#[sqlx::test]
async fn test_try_insert(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let mapping = repo
        .try_insert(new_mapping("test123", "https://example.com"))
        .await
        .unwrap()
        .expect("code should be free");

    assert!(mapping.id > 0);
    assert_eq!(mapping.short_code, "test123");
    assert_eq!(mapping.original_url, "https://example.com");
    assert_eq!(mapping.access_count, 0);
    assert!(mapping.last_accessed.is_none());
}

#[sqlx::test]
async fn test_try_insert_duplicate_code(pool: PgPool) {
    common::insert_mapping(&pool, "dup", "https://first.com").await;
    let repo = PgMappingRepository::new(Arc::new(pool.clone()));

    let result = repo
        .try_insert(new_mapping("dup", "https://second.com"))
        .await
        .unwrap();

    assert!(result.is_none());

    let stored = repo.find_by_code("dup").await.unwrap().unwrap();
    assert_eq!(stored.original_url, "https://first.com");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
async fn test_find_by_code(pool: PgPool) {
    let id = common::insert_mapping(&pool, "abc123", "https://example.com").await;
    let repo = PgMappingRepository::new(Arc::new(pool));

    let mapping = repo.find_by_code("abc123").await.unwrap().unwrap();

    assert_eq!(mapping.id, id);
    assert_eq!(mapping.short_code, "abc123");
    assert_eq!(mapping.original_url, "https://example.com");
}

#[sqlx::test]
async fn test_find_by_code_is_case_sensitive(pool: PgPool) {
    common::insert_mapping(&pool, "AbC", "https://example.com").await;
    let repo = PgMappingRepository::new(Arc::new(pool));

    assert!(repo.find_by_code("abc").await.unwrap().is_none());
    assert!(repo.find_by_code("AbC").await.unwrap().is_some());
}

#[sqlx::test]
async fn test_find_by_code_not_found(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    assert!(repo.find_by_code("notfound").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_record_access(pool: PgPool) {
    common::insert_mapping(&pool, "hits", "https://example.com").await;
    let repo = PgMappingRepository::new(Arc::new(pool));

    assert!(repo.record_access("hits").await.unwrap());
    let first = repo.find_by_code("hits").await.unwrap().unwrap();
    assert_eq!(first.access_count, 1);
    let first_access = first.last_accessed.expect("last_accessed set");

    assert!(repo.record_access("hits").await.unwrap());
    let second = repo.find_by_code("hits").await.unwrap().unwrap();
    assert_eq!(second.access_count, 2);
    assert!(second.last_accessed.unwrap() >= first_access);
    assert_eq!(second.created_at, first.created_at);
}

#[sqlx::test]
async fn test_record_access_unknown_code(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    assert!(!repo.record_access("ghost").await.unwrap());
}

#[sqlx::test]
async fn test_concurrent_record_access_loses_no_updates(pool: PgPool) {
    const N: usize = 50;
    common::insert_mapping(&pool, "busy", "https://example.com").await;
    let repo = Arc::new(PgMappingRepository::new(Arc::new(pool.clone())));

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..N {
        let repo = repo.clone();
        tasks.spawn(async move {
            assert!(repo.record_access("busy").await.unwrap());
            repo.find_by_code("busy").await.unwrap().unwrap().last_accessed
        });
    }

    let mut observed = Vec::with_capacity(N);
    while let Some(result) = tasks.join_next().await {
        observed.push(result.unwrap().expect("last_accessed set after an access"));
    }

    let mapping = repo.find_by_code("busy").await.unwrap().unwrap();
    assert_eq!(mapping.access_count, N as i64);

    let last_accessed = mapping.last_accessed.expect("last_accessed set");
    let latest_observed = observed.into_iter().max().unwrap();
    assert!(last_accessed >= latest_observed);
}

#[sqlx::test]
async fn test_count_and_ping(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool.clone()));
    assert_eq!(repo.count().await.unwrap(), 0);

    common::insert_mapping(&pool, "one", "https://one.com").await;
    common::insert_mapping(&pool, "two", "https://two.com").await;

    assert_eq!(repo.count().await.unwrap(), 2);
    assert!(repo.ping().await.is_ok());
}

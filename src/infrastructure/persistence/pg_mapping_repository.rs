//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Row shape of the `url_mappings` table.
#[derive(sqlx::FromRow)]
struct MappingRow {
    id: i64,
    short_code: String,
    original_url: String,
    created_at: DateTime<Utc>,
    last_accessed: Option<DateTime<Utc>>,
    access_count: i64,
}

impl From<MappingRow> for UrlMapping {
    fn from(r: MappingRow) -> Self {
        UrlMapping::new(
            r.id,
            r.short_code,
            r.original_url,
            r.created_at,
            r.last_accessed,
            r.access_count,
        )
    }
}

/// PostgreSQL repository for URL mappings.
///
/// Writes run in their own transaction. A transaction dropped before
/// `commit` is rolled back by SQLx, so early returns via `?` leave nothing behind.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn try_insert(&self, new_mapping: NewMapping) -> Result<Option<UrlMapping>, AppError> {
        let mut tx = self.pool.begin().await?;

        // The unique index decides races between concurrent inserts of one code.
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO url_mappings (short_code, original_url)
            VALUES ($1, $2)
            ON CONFLICT (short_code) DO NOTHING
            RETURNING id, short_code, original_url, created_at, last_accessed, access_count
            "#,
        )
        .bind(&new_mapping.short_code)
        .bind(&new_mapping.original_url)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, short_code, original_url, created_at, last_accessed, access_count
            FROM url_mappings
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn record_access(&self, short_code: &str) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        // GREATEST ignores NULL, so the first access just takes NOW().
        let result = sqlx::query(
            r#"
            UPDATE url_mappings
            SET access_count = access_count + 1,
                last_accessed = GREATEST(last_accessed, NOW())
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}

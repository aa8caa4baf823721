//! Advertisement Repository Implementation
//!
//! PostgreSQL implementation of the AdvertisementRepository trait.
//! Each advertisement document is one row of the `advertisement` table,
//! keyed by `_id`.

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{AdvertisementDocument, AdvertisementRepository, Page, PageRequest};
use crate::infrastructure::metrics;
use crate::shared::error::StoreError;

const BACKEND: &str = "postgres";

/// Database row representation of an advertisement document.
#[derive(Debug, sqlx::FromRow)]
struct AdvertisementRow {
    #[sqlx(rename = "_id")]
    id: String,
    title: String,
    content: String,
    media_url: String,
    media_type: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

impl AdvertisementRow {
    /// Convert database row to the document shape.
    fn into_document(self) -> Result<AdvertisementDocument, StoreError> {
        let media_type = self.media_type.parse().map_err(StoreError::Backend)?;
        Ok(AdvertisementDocument {
            id: self.id,
            title: self.title,
            content: self.content,
            media_url: self.media_url,
            media_type,
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}

/// PostgreSQL advertisement repository implementation.
#[derive(Clone)]
pub struct PgAdvertisementRepository {
    pool: PgPool,
}

impl PgAdvertisementRepository {
    /// Create a new PgAdvertisementRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// ORDER BY clause for a page request. Column names come from the fixed
/// `SortField` set, never from user input directly.
fn order_clause(request: &PageRequest) -> String {
    let mut keys: Vec<String> = request
        .sort
        .iter()
        .map(|sort| format!("{} {}", sort.field.as_str(), sort.direction.as_sql()))
        .collect();
    keys.push("seq ASC".to_string());
    format!("ORDER BY {}", keys.join(", "))
}

#[async_trait]
impl AdvertisementRepository for PgAdvertisementRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<AdvertisementDocument>, StoreError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, AdvertisementRow>(
            r#"
            SELECT _id, title, content, media_url, media_type, start_date, end_date
            FROM advertisement
            WHERE _id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        metrics::record_store_query("find_by_id", BACKEND, started.elapsed().as_secs_f64());

        row.map(AdvertisementRow::into_document).transpose()
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<AdvertisementDocument>, StoreError> {
        let started = Instant::now();
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM advertisement")
            .fetch_one(&self.pool)
            .await?;

        let sql = format!(
            r#"
            SELECT _id, title, content, media_url, media_type, start_date, end_date
            FROM advertisement
            {}
            LIMIT $1 OFFSET $2
            "#,
            order_clause(&request)
        );
        let rows = sqlx::query_as::<_, AdvertisementRow>(&sql)
            .bind(i64::from(request.size))
            .bind(i64::try_from(request.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;
        metrics::record_store_query("find_page", BACKEND, started.elapsed().as_secs_f64());

        let documents = rows
            .into_iter()
            .map(AdvertisementRow::into_document)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(documents, &request, total.max(0) as u64))
    }

    async fn save(&self, document: AdvertisementDocument) -> Result<AdvertisementDocument, StoreError> {
        let started = Instant::now();
        let row = sqlx::query_as::<_, AdvertisementRow>(
            r#"
            INSERT INTO advertisement (_id, title, content, media_url, media_type, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (_id) DO UPDATE
            SET title = EXCLUDED.title,
                content = EXCLUDED.content,
                media_url = EXCLUDED.media_url,
                media_type = EXCLUDED.media_type,
                start_date = EXCLUDED.start_date,
                end_date = EXCLUDED.end_date
            RETURNING _id, title, content, media_url, media_type, start_date, end_date
            "#,
        )
        .bind(&document.id)
        .bind(&document.title)
        .bind(&document.content)
        .bind(&document.media_url)
        .bind(document.media_type.as_str())
        .bind(document.start_date)
        .bind(document.end_date)
        .fetch_one(&self.pool)
        .await?;
        metrics::record_store_query("save", BACKEND, started.elapsed().as_secs_f64());

        row.into_document()
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let started = Instant::now();
        let result = sqlx::query("DELETE FROM advertisement WHERE _id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        metrics::record_store_query("delete", BACKEND, started.elapsed().as_secs_f64());

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

//! Pageview repository implementation.
//!
//! Pageviews are append-only. The table is named `page_view` (the storage
//! name differs from the logical entity name, kept from the original
//! schema).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres, Row};
use tracing::debug;
use uuid::Uuid;

use quill_core::{Error, Pageview, PageviewRepository, PathVisits, RecordPageviewRequest, Result};

/// PostgreSQL implementation of PageviewRepository.
#[derive(Clone)]
pub struct PgPageviewRepository {
    pool: Pool<Postgres>,
}

impl PgPageviewRepository {
    /// Create a new PgPageviewRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Per-path visit counts in a single grouped query, highest first.
    ///
    /// Database-side counterpart of [`quill_core::rank_visits`]; ties among
    /// equal counts follow the earliest recorded visit per path, matching
    /// the in-memory ranking's first-seen order.
    pub async fn count_by_path(&self) -> Result<Vec<PathVisits>> {
        let rows = sqlx::query(
            "SELECT path, COUNT(*) AS visit_count, MIN(recorded_at_utc) AS first_seen
             FROM page_view
             GROUP BY path
             ORDER BY visit_count DESC, first_seen ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows
            .into_iter()
            .map(|row| PathVisits {
                path: row.get("path"),
                count: row.get::<i64, _>("visit_count") as u64,
            })
            .collect())
    }
}

#[async_trait]
impl PageviewRepository for PgPageviewRepository {
    async fn insert(&self, req: RecordPageviewRequest) -> Result<Uuid> {
        let id = Uuid::now_v7();
        // Stamped per record at insert time, never reused across records
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO page_view (id, path, recorded_at_utc, user_agent)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(&req.path)
        .bind(now)
        .bind(&req.user_agent)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "pageviews",
            op = "insert",
            path = %req.path,
            "Recorded page visit"
        );
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Pageview>> {
        let rows = sqlx::query(
            "SELECT id, path, recorded_at_utc, user_agent
             FROM page_view
             ORDER BY recorded_at_utc ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows
            .into_iter()
            .map(|row| Pageview {
                id: row.get("id"),
                path: row.get("path"),
                recorded_at_utc: row.get::<DateTime<Utc>, _>("recorded_at_utc"),
                user_agent: row.get("user_agent"),
            })
            .collect())
    }
}

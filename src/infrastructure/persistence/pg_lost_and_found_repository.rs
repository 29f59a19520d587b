//! PostgreSQL implementation of the lost-and-found repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{
    ApprovalStatus, Campus, Contact, ContactWay, InvalidDiscriminant, ItemKind, LostAndFoundFilter,
    LostAndFoundRecord,
};
use crate::domain::repositories::LostAndFoundRepository;
use crate::error::AppError;

const RECORD_COLUMNS: &str = "id, is_found_notice, campus, kind, name, place, time, introduction, imgs, \
                              publisher, contact_way, contact, is_approved, created_at";

#[derive(sqlx::FromRow)]
struct RecordRow {
    id: i64,
    is_found_notice: bool,
    campus: i16,
    kind: i16,
    name: String,
    place: String,
    time: String,
    introduction: String,
    imgs: String,
    publisher: String,
    contact_way: i16,
    contact: String,
    is_approved: i16,
    created_at: DateTime<Utc>,
}

impl TryFrom<RecordRow> for LostAndFoundRecord {
    type Error = InvalidDiscriminant;

    fn try_from(r: RecordRow) -> Result<Self, Self::Error> {
        Ok(LostAndFoundRecord {
            id: r.id,
            is_found_notice: r.is_found_notice,
            campus: Campus::try_from(r.campus)?,
            kind: ItemKind::try_from(r.kind)?,
            name: r.name,
            place: r.place,
            time: r.time,
            introduction: r.introduction,
            imgs: r.imgs,
            publisher: r.publisher,
            contact_way: ContactWay::try_from(r.contact_way)?,
            contact: r.contact,
            approval: ApprovalStatus::try_from(r.is_approved)?,
            created_at: r.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ContactRow {
    contact_way: i16,
    contact: String,
}

fn corrupt_row(e: InvalidDiscriminant) -> AppError {
    AppError::internal_from("Corrupt lost-and-found row", e)
}

fn into_records(rows: Vec<RecordRow>) -> Result<Vec<LostAndFoundRecord>, AppError> {
    rows.into_iter()
        .map(|r| LostAndFoundRecord::try_from(r).map_err(corrupt_row))
        .collect()
}

/// PostgreSQL repository for the lost-and-found board.
pub struct PgLostAndFoundRepository {
    pool: Arc<PgPool>,
}

impl PgLostAndFoundRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LostAndFoundRepository for PgLostAndFoundRepository {
    async fn list_public(
        &self,
        filter: LostAndFoundFilter,
    ) -> Result<Vec<LostAndFoundRecord>, AppError> {
        let sql = format!(
            r#"
            SELECT {RECORD_COLUMNS}
            FROM lost_and_found_records
            WHERE is_approved = $1
              AND ($2::boolean IS NULL OR is_found_notice = $2)
              AND ($3::smallint IS NULL OR campus = $3)
              AND ($4::smallint IS NULL OR kind = $4)
            ORDER BY created_at DESC, id DESC
            "#
        );

        let rows = sqlx::query_as::<_, RecordRow>(&sql)
            .bind(ApprovalStatus::Approved as i16)
            .bind(filter.is_found_notice)
            .bind(filter.campus.map(|c| c as i16))
            .bind(filter.kind.map(|k| k as i16))
            .fetch_all(self.pool.as_ref())
            .await?;

        into_records(rows)
    }

    async fn find_contact(&self, id: i64, student_id: &str) -> Result<Option<Contact>, AppError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT contact_way, contact
            FROM lost_and_found_records
            WHERE id = $1 AND publisher = $2
            "#,
        )
        .bind(id)
        .bind(student_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(r) = row else {
            return Ok(None);
        };

        Ok(Some(Contact {
            contact_way: ContactWay::try_from(r.contact_way).map_err(corrupt_row)?,
            contact: r.contact,
        }))
    }

    async fn find_latest_public(&self) -> Result<Option<LostAndFoundRecord>, AppError> {
        let sql = format!(
            r#"
            SELECT {RECORD_COLUMNS}
            FROM lost_and_found_records
            WHERE is_approved = $1
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#
        );

        let row = sqlx::query_as::<_, RecordRow>(&sql)
            .bind(ApprovalStatus::Approved as i16)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(|r| LostAndFoundRecord::try_from(r).map_err(corrupt_row))
            .transpose()
    }

    async fn list_by_publisher(
        &self,
        student_id: &str,
        status: ApprovalStatus,
    ) -> Result<Vec<LostAndFoundRecord>, AppError> {
        let sql = format!(
            r#"
            SELECT {RECORD_COLUMNS}
            FROM lost_and_found_records
            WHERE publisher = $1 AND is_approved = $2
            ORDER BY created_at DESC, id DESC
            "#
        );

        let rows = sqlx::query_as::<_, RecordRow>(&sql)
            .bind(student_id)
            .bind(status as i16)
            .fetch_all(self.pool.as_ref())
            .await?;

        into_records(rows)
    }
}

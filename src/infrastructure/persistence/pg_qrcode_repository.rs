//! PostgreSQL implementation of the QR code repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Qrcode;
use crate::domain::repositories::QrcodeRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct QrcodeRow {
    id: i64,
    college: i16,
    department: String,
    description: String,
    feedback_type: i16,
    location: String,
    status: bool,
    scan_count: i64,
    feedback_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<QrcodeRow> for Qrcode {
    fn from(r: QrcodeRow) -> Self {
        Qrcode {
            id: r.id,
            college: r.college,
            department: r.department,
            description: r.description,
            feedback_type: r.feedback_type,
            location: r.location,
            status: r.status,
            scan_count: r.scan_count,
            feedback_count: r.feedback_count,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for QR codes.
pub struct PgQrcodeRepository {
    pool: Arc<PgPool>,
}

impl PgQrcodeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QrcodeRepository for PgQrcodeRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Qrcode>, AppError> {
        let row = sqlx::query_as::<_, QrcodeRow>(
            r#"
            SELECT id, college, department, description, feedback_type, location, status,
                   scan_count, feedback_count, created_at, updated_at
            FROM qrcodes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Qrcode::from))
    }

    async fn save(&self, qrcode: &Qrcode) -> Result<bool, AppError> {
        // Counters are maintained by the scan/feedback flows, not written back here.
        let result = sqlx::query(
            r#"
            UPDATE qrcodes SET
                college       = $2,
                department    = $3,
                description   = $4,
                feedback_type = $5,
                location      = $6,
                status        = $7,
                updated_at    = NOW()
            WHERE id = $1
            "#,
        )
        .bind(qrcode.id)
        .bind(qrcode.college)
        .bind(&qrcode.department)
        .bind(&qrcode.description)
        .bind(qrcode.feedback_type)
        .bind(&qrcode.location)
        .bind(qrcode.status)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

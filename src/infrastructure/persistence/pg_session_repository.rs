//! PostgreSQL implementation of the session repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Session;
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: i64,
    student_id: String,
    name: String,
    token_hash: String,
    created_at: DateTime<Utc>,
    last_used_at: Option<DateTime<Utc>>,
    revoked_at: Option<DateTime<Utc>>,
}

impl From<SessionRow> for Session {
    fn from(r: SessionRow) -> Self {
        Session {
            id: r.id,
            student_id: r.student_id,
            name: r.name,
            token_hash: r.token_hash,
            created_at: r.created_at,
            last_used_at: r.last_used_at,
            revoked_at: r.revoked_at,
        }
    }
}

/// PostgreSQL repository for bearer-token sessions.
///
/// Stores hashed tokens only. Raw tokens are never persisted.
pub struct PgSessionRepository {
    pool: Arc<PgPool>,
}

impl PgSessionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn find_student_id(&self, token_hash: &str) -> Result<Option<String>, AppError> {
        let student_id = sqlx::query_scalar::<_, String>(
            r#"
            SELECT student_id
            FROM api_sessions
            WHERE token_hash = $1
              AND revoked_at IS NULL
            "#,
        )
        .bind(token_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(student_id)
    }

    async fn touch(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE api_sessions
            SET last_used_at = NOW()
            WHERE token_hash = $1
              AND revoked_at IS NULL
            "#,
        )
        .bind(token_hash)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn create(
        &self,
        student_id: &str,
        name: &str,
        token_hash: &str,
    ) -> Result<Session, AppError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            INSERT INTO api_sessions (student_id, name, token_hash)
            VALUES ($1, $2, $3)
            RETURNING id, student_id, name, token_hash, created_at, last_used_at, revoked_at
            "#,
        )
        .bind(student_id)
        .bind(name)
        .bind(token_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Session>, AppError> {
        let rows = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, student_id, name, token_hash, created_at, last_used_at, revoked_at
            FROM api_sessions
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Session::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Session>, AppError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, student_id, name, token_hash, created_at, last_used_at, revoked_at
            FROM api_sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Session::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Session>, AppError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, student_id, name, token_hash, created_at, last_used_at, revoked_at
            FROM api_sessions
            WHERE name = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Session::from))
    }

    async fn revoke(&self, id: i64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE api_sessions
            SET revoked_at = NOW()
            WHERE id = $1 AND revoked_at IS NULL
            "#,
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}

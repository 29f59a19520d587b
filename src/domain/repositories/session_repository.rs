//! Repository trait for bearer-token sessions.

use crate::domain::entities::Session;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for API session management.
///
/// Tokens are never stored in clear; every method takes the HMAC hash produced
/// by [`crate::application::services::auth_service::hash_token`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSessionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Resolves a token hash to the student owning an active session.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(student_id))` if the session exists and is not revoked
    /// - `Ok(None)` otherwise
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_student_id(&self, token_hash: &str) -> Result<Option<String>, AppError>;

    /// Updates the `last_used_at` timestamp of an active session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn touch(&self, token_hash: &str) -> Result<(), AppError>;

    /// Creates a session for `student_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a duplicate hash.
    async fn create(
        &self,
        student_id: &str,
        name: &str,
        token_hash: &str,
    ) -> Result<Session, AppError>;

    /// Lists all sessions, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Session>, AppError>;

    /// Finds a session by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Session>, AppError>;

    /// Finds a session by its name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Session>, AppError>;

    /// Revokes a session, preventing further authentication.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn revoke(&self, id: i64) -> Result<(), AppError>;
}

//! Repository trait for lost-and-found records.

use crate::domain::entities::{ApprovalStatus, Contact, LostAndFoundFilter, LostAndFoundRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the lost-and-found board.
///
/// Lookups by key return `Ok(None)` when no row matches; `Err` is reserved for
/// storage faults.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLostAndFoundRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LostAndFoundRepository: Send + Sync {
    /// Lists approved records matching `filter`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_public(
        &self,
        filter: LostAndFoundFilter,
    ) -> Result<Vec<LostAndFoundRecord>, AppError>;

    /// Returns the contact details of record `id` if `student_id` published it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Contact))` if the record exists and belongs to `student_id`
    /// - `Ok(None)` otherwise
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_contact(&self, id: i64, student_id: &str) -> Result<Option<Contact>, AppError>;

    /// Returns the most recently created approved record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_latest_public(&self) -> Result<Option<LostAndFoundRecord>, AppError>;

    /// Lists the records published by `student_id` in the given review state, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_publisher(
        &self,
        student_id: &str,
        status: ApprovalStatus,
    ) -> Result<Vec<LostAndFoundRecord>, AppError>;
}

//! Lost-and-found board queries.

use std::sync::Arc;

use crate::domain::entities::{
    ApprovalStatus, AuthUser, Contact, LostAndFoundFilter, LostAndFoundRecord,
};
use crate::domain::repositories::LostAndFoundRepository;
use crate::error::AppError;
use serde_json::json;

/// Service behind the lost-and-found endpoints.
///
/// Converts repository absence (`Ok(None)`) into [`AppError::NotFound`] and passes
/// storage faults through unchanged.
pub struct LostAndFoundService {
    repository: Arc<dyn LostAndFoundRepository>,
}

impl LostAndFoundService {
    pub fn new(repository: Arc<dyn LostAndFoundRepository>) -> Self {
        Self { repository }
    }

    /// Lists approved records matching `filter`. An empty board is not an error.
    pub async fn list(
        &self,
        filter: LostAndFoundFilter,
    ) -> Result<Vec<LostAndFoundRecord>, AppError> {
        let records = self.repository.list_public(filter).await?;
        tracing::debug!(?filter, count = records.len(), "Listed lost-and-found records");
        Ok(records)
    }

    /// Returns the contact details of record `id` for its publisher.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record with `id` was published by `user`.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_contact(&self, user: &AuthUser, id: i64) -> Result<Contact, AppError> {
        match self.repository.find_contact(id, &user.student_id).await {
            Ok(Some(contact)) => Ok(contact),
            Ok(None) => Err(AppError::not_found(
                "Lost-and-found record not found",
                json!({ "id": id }),
            )),
            Err(e) => Err(e),
        }
    }

    /// Returns the newest approved record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the board is empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_latest(&self) -> Result<LostAndFoundRecord, AppError> {
        match self.repository.find_latest_public().await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(AppError::not_found(
                "No lost-and-found record published yet",
                json!({}),
            )),
            Err(e) => Err(e),
        }
    }

    /// Lists the caller's own submissions in the given review state.
    pub async fn list_user_records(
        &self,
        user: &AuthUser,
        status: ApprovalStatus,
    ) -> Result<Vec<LostAndFoundRecord>, AppError> {
        self.repository
            .list_by_publisher(&user.student_id, status)
            .await
    }
}

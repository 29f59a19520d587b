//! Storage liveness check.

use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Runs a trivial round-trip against the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}

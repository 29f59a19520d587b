//! Repository trait for rights QR codes.

use crate::domain::entities::Qrcode;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for QR code records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgQrcodeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QrcodeRepository: Send + Sync {
    /// Finds a QR code by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Qrcode))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Qrcode>, AppError>;

    /// Persists every editable field of `qrcode` and bumps `updated_at`.
    ///
    /// Returns `Ok(false)` when no row with `qrcode.id` exists anymore.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, qrcode: &Qrcode) -> Result<bool, AppError>;
}

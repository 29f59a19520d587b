//! QR code read and update.

use std::sync::Arc;

use crate::domain::entities::{Qrcode, QrcodeUpdate};
use crate::domain::repositories::QrcodeRepository;
use crate::error::AppError;
use serde_json::json;

/// Service behind the QR code endpoints.
///
/// Updates follow fetch, apply, save: the stored record is loaded, its six editable
/// fields are replaced via [`Qrcode::apply`], and the whole record is written back.
/// There is no optimistic concurrency check; the last writer wins.
pub struct QrcodeService {
    repository: Arc<dyn QrcodeRepository>,
}

impl QrcodeService {
    pub fn new(repository: Arc<dyn QrcodeRepository>) -> Self {
        Self { repository }
    }

    /// Retrieves a QR code by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no QR code has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_qrcode(&self, id: i64) -> Result<Qrcode, AppError> {
        match self.repository.find_by_id(id).await {
            Ok(Some(qrcode)) => Ok(qrcode),
            Ok(None) => Err(not_found(id)),
            Err(e) => Err(e),
        }
    }

    /// Replaces the editable fields of QR code `id` and persists the record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no QR code has this id, in which case
    /// nothing is written, or if it disappeared before the write.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_qrcode(&self, id: i64, update: QrcodeUpdate) -> Result<Qrcode, AppError> {
        let mut qrcode = match self.repository.find_by_id(id).await {
            Ok(Some(qrcode)) => qrcode,
            Ok(None) => return Err(not_found(id)),
            Err(e) => return Err(e),
        };

        qrcode.apply(update);

        if !self.repository.save(&qrcode).await? {
            return Err(not_found(id));
        }

        tracing::info!(qrcode_id = id, "Qrcode updated");
        Ok(qrcode)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("Qrcode not found", json!({ "id": id }))
}

//! DTOs for the QR code endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{Qrcode, QrcodeUpdate};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("must not be empty".into());
        return Err(err);
    }
    Ok(())
}

/// Request body for `PUT /api/qrcode`.
///
/// Every field except `description` is required; numeric fields must be positive.
/// The six editable fields replace the stored values as a whole.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateQrcodeRequest {
    #[serde(default)]
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i64,

    #[serde(default)]
    #[validate(range(min = 1, message = "college is required"))]
    pub college: i16,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub department: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, message = "feedback_type is required"))]
    pub feedback_type: i16,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub location: String,

    #[serde(default)]
    pub status: bool,
}

impl UpdateQrcodeRequest {
    /// Splits the request into the target id and its replacement values.
    ///
    /// Text fields are stored exactly as sent; trimming only applies to the
    /// blank check.
    pub fn into_update(self) -> (i64, QrcodeUpdate) {
        let update = QrcodeUpdate {
            college: self.college,
            department: self.department,
            description: self.description.unwrap_or_default(),
            feedback_type: self.feedback_type,
            location: self.location,
            status: self.status,
        };
        (self.id, update)
    }
}

/// Full QR code representation.
#[derive(Debug, Serialize)]
pub struct QrcodeResponse {
    pub id: i64,
    pub college: i16,
    pub department: String,
    pub description: String,
    pub feedback_type: i16,
    pub location: String,
    pub status: bool,
    pub scan_count: i64,
    pub feedback_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Qrcode> for QrcodeResponse {
    fn from(q: Qrcode) -> Self {
        Self {
            id: q.id,
            college: q.college,
            department: q.department,
            description: q.description,
            feedback_type: q.feedback_type,
            location: q.location,
            status: q.status,
            scan_count: q.scan_count,
            feedback_count: q.feedback_count,
            created_at: q.created_at,
            updated_at: q.updated_at,
        }
    }
}

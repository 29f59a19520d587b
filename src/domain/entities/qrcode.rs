//! Rights QR code entity.

use chrono::{DateTime, Utc};

/// A rights (benefits/feedback) QR code as persisted.
///
/// `college` and `feedback_type` are catalogue codes owned by the client; the
/// service only requires them to be non-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Qrcode {
    pub id: i64,
    pub college: i16,
    pub department: String,
    pub description: String,
    pub feedback_type: i16,
    pub location: String,
    /// Whether the code is currently active.
    pub status: bool,
    pub scan_count: i64,
    pub feedback_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Qrcode {
    /// Overwrites the editable fields with `update`.
    ///
    /// Identifier, counters and timestamps are left untouched. This is a whole
    /// replacement of the six editable fields, not a patch.
    pub fn apply(&mut self, update: QrcodeUpdate) {
        let QrcodeUpdate {
            college,
            department,
            description,
            feedback_type,
            location,
            status,
        } = update;

        self.college = college;
        self.department = department;
        self.description = description;
        self.feedback_type = feedback_type;
        self.location = location;
        self.status = status;
    }
}

/// Replacement values for the editable fields of a [`Qrcode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrcodeUpdate {
    pub college: i16,
    pub department: String,
    pub description: String,
    pub feedback_type: i16,
    pub location: String,
    pub status: bool,
}

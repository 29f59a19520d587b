//! API session entity resolving a bearer token to a student.

use chrono::{DateTime, Utc};

/// A bearer-token session.
///
/// Only the HMAC-SHA256 hash of the token is stored.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: i64,
    pub student_id: String,
    pub name: String,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }
}

/// Identity of the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub student_id: String,
}

impl AuthUser {
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
        }
    }
}

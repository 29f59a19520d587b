//! Core domain entities.
//!
//! Entities are plain data structures; persistence and HTTP shapes live in the
//! infrastructure and API layers.
//!
//! # Entity Types
//!
//! - [`LostAndFoundRecord`] - A lost-and-found board submission
//! - [`Qrcode`] - A rights QR code, edited through [`QrcodeUpdate`]
//! - [`Session`] - A bearer-token session, resolved to an [`AuthUser`]

pub mod lost_and_found;
pub mod qrcode;
pub mod session;

pub use lost_and_found::{
    ApprovalStatus, Campus, Contact, ContactWay, ItemKind, LostAndFoundFilter, LostAndFoundRecord,
};
pub use qrcode::{Qrcode, QrcodeUpdate};
pub use session::{AuthUser, Session};

/// A stored or submitted number that is not a valid value of its enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field} value: {value}")]
pub struct InvalidDiscriminant {
    pub field: &'static str,
    pub value: i16,
}

impl InvalidDiscriminant {
    pub fn new(field: &'static str, value: i16) -> Self {
        Self { field, value }
    }
}

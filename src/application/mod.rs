//! Application layer services implementing business logic.
//!
//! Services consume repository traits, turn repository absence into
//! [`crate::error::AppError::NotFound`], and give HTTP handlers a small API.
//!
//! # Available Services
//!
//! - [`services::LostAndFoundService`] - Board listing, contact, latest item, own submissions
//! - [`services::QrcodeService`] - QR code read and whole-record update
//! - [`services::AuthService`] - Bearer token to caller identity

pub mod services;

//! Business logic services for the application layer.

pub mod auth_service;
pub mod lost_and_found_service;
pub mod qrcode_service;

pub use auth_service::AuthService;
pub use lost_and_found_service::LostAndFoundService;
pub use qrcode_service::QrcodeService;

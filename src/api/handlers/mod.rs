//! HTTP request handlers.

pub mod health;
pub mod lost_and_found;
pub mod qrcode;

pub use health::health_handler;
pub use lost_and_found::{contact_handler, latest_handler, list_handler, user_status_handler};
pub use qrcode::{get_qrcode_handler, update_qrcode_handler};

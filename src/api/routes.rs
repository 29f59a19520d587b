//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    contact_handler, get_qrcode_handler, latest_handler, list_handler, update_qrcode_handler,
    user_status_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST /lost-and-found/list`        - Approved records, optionally filtered
/// - `POST /lost-and-found/contact`     - Contact details of one of the caller's records
/// - `GET  /lost-and-found/latest`      - Newest approved record
/// - `POST /lost-and-found/user/status` - Caller's own records by review state
/// - `PUT  /qrcode`                     - Overwrite a QR code's editable fields
/// - `GET  /qrcode/{id}`                - Read a QR code
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/lost-and-found/list", post(list_handler))
        .route("/lost-and-found/contact", post(contact_handler))
        .route("/lost-and-found/latest", get(latest_handler))
        .route("/lost-and-found/user/status", post(user_status_handler))
        .route("/qrcode", put(update_qrcode_handler))
        .route("/qrcode/{id}", get(get_qrcode_handler))
}

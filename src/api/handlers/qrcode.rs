//! Handlers for the rights QR code registry.

use axum::extract::{Path, State, rejection::PathRejection};
use serde_json::json;

use crate::api::dto::qrcode::{QrcodeResponse, UpdateQrcodeRequest};
use crate::api::extract::ValidJson;
use crate::api::response::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Overwrites the editable fields of an existing QR code.
///
/// # Endpoint
///
/// `PUT /api/qrcode`
///
/// # Request Body
///
/// ```json
/// {
///   "id": 42,
///   "college": 3,
///   "department": "Student Union",
///   "description": "Canteen feedback",
///   "feedback_type": 1,
///   "location": "Canteen 2",
///   "status": true
/// }
/// ```
///
/// `description` may be omitted and is then stored empty. The counters are not
/// writable through this endpoint.
///
/// # Response
///
/// ```json
/// { "code": 200, "msg": "OK", "data": null }
/// ```
///
/// # Errors
///
/// - `ParamError` for malformed JSON, a non-positive `id`, `college` or
///   `feedback_type`, or a blank `department`/`location`. Storage is not touched.
/// - `ResourceNotFound` if no QR code has this id. Nothing is written.
pub async fn update_qrcode_handler(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<UpdateQrcodeRequest>,
) -> Result<ApiResponse<()>, AppError> {
    let (id, update) = payload.into_update();
    state.qrcode_service.update_qrcode(id, update).await?;
    Ok(ApiResponse::empty())
}

/// Returns a QR code with its counters.
///
/// # Endpoint
///
/// `GET /api/qrcode/{id}`
///
/// # Errors
///
/// - `ParamError` if `id` is not a positive integer
/// - `ResourceNotFound` if no QR code has this id
pub async fn get_qrcode_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<ApiResponse<QrcodeResponse>, AppError> {
    let Path(id) = id?;
    if id < 1 {
        return Err(AppError::param(
            "Validation failed",
            json!({ "fields": { "id": ["id must be a positive integer"] } }),
        ));
    }

    let qrcode = state.qrcode_service.get_qrcode(id).await?;
    Ok(ApiResponse::success(qrcode.into()))
}

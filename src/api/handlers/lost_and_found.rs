//! Handlers for the lost-and-found bulletin board.

use axum::extract::State;

use crate::api::dto::lost_and_found::{
    ContactRequest, ContactResponse, LatestLostAndFoundResponse, LostAndFoundListRequest,
    LostAndFoundListResponse, UserStatusRequest, UserStatusResponse,
};
use crate::api::extract::ValidJson;
use crate::api::response::ApiResponse;
use crate::domain::entities::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists approved records, newest first.
///
/// # Endpoint
///
/// `POST /api/lost-and-found/list`
///
/// # Request Body
///
/// ```json
/// { "type": true, "campus": 1, "kind": 0 }
/// ```
///
/// Every field is optional; `campus: 0` and `kind: 0` mean "all".
///
/// # Response
///
/// ```json
/// {
///   "code": 200,
///   "msg": "OK",
///   "data": {
///     "list": [
///       { "id": 12, "imgs": ["a.png"], "name": "Blue umbrella", "place": "Library",
///         "time": "2024-10-01 14:00", "introduction": "Folding", "kind": 1 }
///     ]
///   }
/// }
/// ```
pub async fn list_handler(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LostAndFoundListRequest>,
) -> Result<ApiResponse<LostAndFoundListResponse>, AppError> {
    let filter = payload.to_filter()?;
    let records = state.lost_and_found_service.list(filter).await?;

    Ok(ApiResponse::success(LostAndFoundListResponse {
        list: records.into_iter().map(Into::into).collect(),
    }))
}

/// Returns the contact details of one of the caller's records.
///
/// # Endpoint
///
/// `POST /api/lost-and-found/contact`
///
/// # Errors
///
/// - `ParamError` if `id` is missing or not positive
/// - `ResourceNotFound` if the record does not exist or was published by someone else
pub async fn contact_handler(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(payload): ValidJson<ContactRequest>,
) -> Result<ApiResponse<ContactResponse>, AppError> {
    let contact = state
        .lost_and_found_service
        .get_contact(&user, payload.id)
        .await?;

    Ok(ApiResponse::success(contact.into()))
}

/// Returns a summary of the newest approved record.
///
/// # Endpoint
///
/// `GET /api/lost-and-found/latest`
///
/// # Errors
///
/// `ResourceNotFound` while nothing has been approved yet.
pub async fn latest_handler(
    State(state): State<AppState>,
) -> Result<ApiResponse<LatestLostAndFoundResponse>, AppError> {
    let record = state.lost_and_found_service.get_latest().await?;
    Ok(ApiResponse::success(record.into()))
}

/// Lists the caller's own submissions in one review state.
///
/// # Endpoint
///
/// `POST /api/lost-and-found/user/status`
///
/// `status` is 0 (withdrawn, the default), 1 (approved) or 2 (pending).
pub async fn user_status_handler(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(payload): ValidJson<UserStatusRequest>,
) -> Result<ApiResponse<UserStatusResponse>, AppError> {
    let status = payload.approval_status()?;
    let records = state
        .lost_and_found_service
        .list_user_records(&user, status)
        .await?;

    Ok(ApiResponse::success(UserStatusResponse {
        list: records.into_iter().map(Into::into).collect(),
    }))
}

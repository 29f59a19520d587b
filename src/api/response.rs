//! Uniform response envelope written by every `/api` endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use crate::error::ErrorKind;

/// Envelope code for a successful response.
pub const SUCCESS_CODE: i32 = 200;

/// Standard `{code, msg, data}` envelope.
///
/// Successful responses carry the payload in `data`; an empty payload is written
/// as `"data": null`. Failures are produced by [`crate::error::AppError`] and carry
/// the API error code of their [`ErrorKind`].
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: &'static str,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wraps a payload in a success envelope.
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            msg: "OK",
            data,
        }
    }

    /// Renders the envelope with an explicit HTTP status.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

impl ApiResponse<()> {
    /// Success envelope without payload.
    pub fn empty() -> Self {
        Self::success(())
    }
}

impl ApiResponse<Value> {
    pub fn failure(kind: ErrorKind, data: Value) -> Self {
        Self {
            code: kind.code(),
            msg: kind.message(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        self.with_status(StatusCode::OK)
    }
}

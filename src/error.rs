//! Application error type and its classification into API error categories.
//!
//! Every failure in a request is turned into exactly one [`AppError`] and rendered once,
//! by [`IntoResponse`], as a failure envelope:
//!
//! ```json
//! { "code": 200404, "msg": "Resource not found", "data": null }
//! ```
//!
//! | Kind | HTTP | API code |
//! |---|---|---|
//! | [`ErrorKind::ParamError`] | 400 | 200501 |
//! | [`ErrorKind::Unauthorized`] | 401 | 200401 |
//! | [`ErrorKind::ResourceNotFound`] | 404 | 200404 |
//! | [`ErrorKind::ServerError`] | 500 | 200500 |
//!
//! Internal error details are logged but never sent to the client.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::api::response::ApiResponse;

/// API error categories surfaced at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ParamError,
    Unauthorized,
    ResourceNotFound,
    ServerError,
}

impl ErrorKind {
    pub const fn status(self) -> StatusCode {
        match self {
            ErrorKind::ParamError => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::ResourceNotFound => StatusCode::NOT_FOUND,
            ErrorKind::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Numeric code written to the envelope's `code` field.
    pub const fn code(self) -> i32 {
        match self {
            ErrorKind::ParamError => 200501,
            ErrorKind::Unauthorized => 200401,
            ErrorKind::ResourceNotFound => 200404,
            ErrorKind::ServerError => 200500,
        }
    }

    /// Client-facing message written to the envelope's `msg` field.
    pub const fn message(self) -> &'static str {
        match self {
            ErrorKind::ParamError => "Invalid parameters",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::ResourceNotFound => "Resource not found",
            ErrorKind::ServerError => "Server error, please try again later",
        }
    }

    /// Label used for logs and metrics.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ParamError => "param_error",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::ResourceNotFound => "resource_not_found",
            ErrorKind::ServerError => "server_error",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid parameters: {message}")]
    Param { message: String, details: Value },

    #[error("unauthorized: {message}")]
    Unauthorized { message: String, details: Value },

    #[error("not found: {message}")]
    NotFound { message: String, details: Value },

    #[error("internal error: {message}")]
    Internal {
        message: String,
        details: Value,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AppError {
    pub fn param(message: impl Into<String>, details: Value) -> Self {
        Self::Param {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
            source: None,
        }
    }

    /// Wraps an underlying failure, keeping it for the server log only.
    pub fn internal_from(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            details: json!({}),
            source: Some(source.into()),
        }
    }

    /// Classifies this error into its API category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Param { .. } => ErrorKind::ParamError,
            AppError::Unauthorized { .. } => ErrorKind::Unauthorized,
            AppError::NotFound { .. } => ErrorKind::ResourceNotFound,
            AppError::Internal { .. } => ErrorKind::ServerError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        metrics::counter!("api_errors_total", "kind" => kind.as_str()).increment(1);

        // Only parameter errors echo their details back; everything else stays in the log.
        let data = match self {
            AppError::Param { message, details } => {
                tracing::warn!(kind = kind.as_str(), %message, %details, "Request rejected");
                details
            }
            AppError::Unauthorized { message, details } | AppError::NotFound { message, details } => {
                tracing::warn!(kind = kind.as_str(), %message, %details, "Request rejected");
                Value::Null
            }
            AppError::Internal {
                message,
                details,
                source,
            } => {
                match source {
                    Some(source) => tracing::error!(
                        kind = kind.as_str(),
                        %message,
                        %details,
                        error = ?source,
                        "Request failed"
                    ),
                    None => tracing::error!(kind = kind.as_str(), %message, %details, "Request failed"),
                }
                Value::Null
            }
        };

        ApiResponse::failure(kind, data).with_status(kind.status())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found", json!({})),
            other => AppError::internal_from("Database error", other),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: serde_json::Map<String, Value> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages: Vec<Value> = errs
                    .iter()
                    .map(|e| match &e.message {
                        Some(msg) => Value::String(msg.to_string()),
                        None => Value::String(e.code.to_string()),
                    })
                    .collect();
                (field.to_string(), Value::Array(messages))
            })
            .collect();

        AppError::param("Validation failed", json!({ "fields": fields }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::param(
            "Malformed JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::param(
            "Invalid path parameter",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

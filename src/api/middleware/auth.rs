//! Bearer token authentication middleware and caller-identity extractor.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::{domain::entities::AuthUser, error::AppError, state::AppState};

/// Resolves the caller from the `Authorization` header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Resolve the token hash to an active session via [`crate::application::services::AuthService`]
/// 3. Insert the resulting [`AuthUser`] into the request extensions
/// 4. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing or malformed, or if the
/// token matches no active session.
///
/// # Example
///
/// ```rust,ignore
/// let protected = api::routes::protected_routes()
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Authorization header is missing or invalid" }),
            )
        })?;

    let user = st.auth_service.authenticate(&token).await?;
    tracing::debug!(student_id = %user.student_id, "Caller authenticated");

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Handlers take the caller identity explicitly:
///
/// ```rust,ignore
/// async fn my_handler(user: AuthUser) -> Result<ApiResponse<()>, AppError> { ... }
/// ```
///
/// Rejects with `401` when [`layer`] did not run for the route.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().cloned().ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "No authenticated caller" }),
            )
        })
    }
}

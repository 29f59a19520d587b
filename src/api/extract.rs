//! Request extractors that report failures through the API envelope.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that is deserialized and then validated before the handler runs.
///
/// Malformed JSON, a wrong content type and validation failures are all rejected
/// with [`AppError::Param`], so a handler taking `ValidJson<T>` never sees
/// unvalidated input and never reaches storage with it.
///
/// ```rust,ignore
/// async fn handler(ValidJson(payload): ValidJson<UpdateQrcodeRequest>) -> ... { }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

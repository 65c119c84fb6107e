//! Request extractors shared by the handlers

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and validated.
///
/// The body is parsed as JSON whatever `Content-Type` the client sent.
/// Unparseable bodies and failed validation reject with [`AppError`]
/// (400 + invalid body) instead of axum's default rejections.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidRequest(e.body_text()))?;
        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

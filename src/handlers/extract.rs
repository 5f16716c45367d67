// handlers/extract.rs - Request body extractors that reject with ApiError
//
// axum's own `Json` rejects with a plain-text body that quotes the parser
// error. These wrappers route every body failure through `ApiError` so the
// client always sees `{ "error": true, "message", "code" }`.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// A JSON body. Missing content type or malformed JSON answers 400.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

/// A JSON body that may be left out entirely. An empty body yields
/// `T::default()`; anything else must parse as JSON.
#[derive(Debug)]
pub struct OptionalJsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for OptionalJsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::warn!("Failed to read request body: {}", e);
            ApiError::bad_request("Invalid JSON body")
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(OptionalJsonBody(T::default()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(OptionalJsonBody(value))
    }
}

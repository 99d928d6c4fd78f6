//! Extractors whose rejections render as [`AppError`] envelopes.
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies; these wrap
//! them so decode failures follow the same error mapping as handler errors.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor. Undecodable bodies are treated as unhandled failures.
///
/// The body is decoded regardless of the `Content-Type` header.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice(&bytes)
            .map_err(|err| AppError::MalformedBody(err.to_string()))?;
        Ok(ApiJson(value))
    }
}

/// Path parameter extractor. Unparsable segments become `400 BAD REQUEST`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

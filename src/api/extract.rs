//! Extractor wrappers that keep rejections inside the JSON error envelope.
//!
//! Axum's stock extractors reply to bad input with plain-text bodies. These
//! wrappers translate each rejection into an [`AppError`] so clients always
//! see the uniform envelope:
//!
//! - [`AppJson`] - unreadable or mistyped JSON body → 400
//! - [`AppPath`] - path segment that does not parse (e.g. a non-numeric id) → 404,
//!   the same answer an unroutable URL gets
//! - [`AppQuery`] - undecodable query string → 400

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor with an enveloped 400 rejection.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(AppJson(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "rejected request body");
                Err(AppError::BadRequest)
            }
        }
    }
}

/// Path extractor with an enveloped 404 rejection.
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(AppPath(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "rejected path parameter");
                Err(AppError::NotFound)
            }
        }
    }
}

/// Query-string extractor with an enveloped 400 rejection.
pub struct AppQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(AppQuery(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "rejected query string");
                Err(AppError::BadRequest)
            }
        }
    }
}

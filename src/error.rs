//! Application error taxonomy and its mapping onto the JSON error envelope.
//!
//! Every error response has the same shape:
//!
//! ```json
//! { "success": false, "error": 422, "message": "Not Processable" }
//! ```
//!
//! The variants keep failure causes distinguishable in code while the wire
//! format stays fixed per status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: String,
}

/// Tagged error type returned by every handler.
///
/// The `Display` strings double as the envelope `message` field, so they
/// must stay in sync with what API clients expect per status code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 404 — a resource or result set is absent.
    #[error("Resource Not Found")]
    NotFound,

    /// 400 — the request itself is malformed (e.g. an unreadable JSON body).
    #[error("Bad Request")]
    BadRequest,

    /// 422 — a write or compound query failed; the source is kept for logs.
    #[error("Not Processable")]
    Unprocessable(anyhow::Error),

    /// 500 — an unexpected failure outside any handler's recovery path.
    #[error("Internal Server Error")]
    Internal(anyhow::Error),
}

impl AppError {
    pub fn unprocessable(source: impl Into<anyhow::Error>) -> Self {
        Self::Unprocessable(source.into())
    }

    pub fn internal(source: impl Into<anyhow::Error>) -> Self {
        Self::Internal(source.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Unprocessable(source) => {
                tracing::warn!(error = ?source, "request not processable");
            }
            AppError::Internal(source) => {
                tracing::error!(error = ?source, "internal server error");
            }
            _ => {}
        }

        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

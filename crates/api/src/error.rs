use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use category_core::error::CoreError;

use crate::response::Envelope;

/// Message returned in place of internal error details.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so every failure is rendered as an [`Envelope`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `category_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A request body that could not be decoded as the expected JSON shape.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    Some(format!("{entity} with id {id} not found")),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, Some(msg.clone())),
                CoreError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, None),
            },

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Some(msg.clone())),
            AppError::MalformedBody(msg) => {
                tracing::error!(error = %msg, "Unhandled request body failure");
                internal()
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        Envelope::new(status, message).into_response()
    }
}

fn internal() -> (StatusCode, Option<String>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(INTERNAL_ERROR_MESSAGE.to_string()),
    )
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

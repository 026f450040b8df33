//! HTTP error responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{domain::RepositoryError, usecase::SubmitError};

/// Error type returned by HTTP handlers.
///
/// Client mistakes become `400` with a plain-text message; anything else is
/// logged and reported as an opaque `500`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Submit(#[from] SubmitError),

    /// The body was not valid JSON for the endpoint
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Submit(SubmitError::Validation(_)) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Submit(SubmitError::Repository(e)) | Self::Repository(e) => {
                tracing::error!(error = %e, "Store failure");
                return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                    .into_response();
            }
        };

        (status, self.to_string()).into_response()
    }
}

//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use cuti_core::error::{AppError, ErrorKind};

/// Message shown to clients for every server-side failure.
pub const SERVER_ERROR: &str = "Terjadi kesalahan pada server";

/// Result type returned by every handler.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error body: a single message, or every field message when validation
/// reported more than one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Message(String),
    Fields(Vec<String>),
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub errors: ErrorBody,
}

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Status code for the wrapped error kind.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::Validation | ErrorKind::Conflict | ErrorKind::Authentication => {
                StatusCode::BAD_REQUEST
            }
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ApiErrorResponse {
        let errors = if self.0.kind.is_server_error() {
            ErrorBody::Message(SERVER_ERROR.to_string())
        } else if self.0.details.len() > 1 {
            ErrorBody::Fields(self.0.details.clone())
        } else {
            ErrorBody::Message(self.0.message.clone())
        };
        ApiErrorResponse { errors }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if self.0.kind.is_server_error() {
            let cause = self.0.source.as_ref().map(|s| s.to_string());
            tracing::error!(
                kind = %self.0.kind,
                error = %self.0.message,
                cause = cause.as_deref().unwrap_or("-"),
                "Request failed with server error"
            );
        }

        (status, Json(self.body())).into_response()
    }
}

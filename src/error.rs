//! Request-level error type and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::dto::error::ErrorResponse;
use crate::domain::FetchError;
use crate::domain::ranking::LimitExceeded;

/// Terminal failure of a website query. Never retried.
///
/// Rendered as `{"Message": ..., "ErrorCode": ...}` with the status line
/// matching `ErrorCode`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Invalid request from the caller (400).
    #[error("{message}")]
    BadRequest { message: String },
    /// Fault inside the service or an upstream source (500).
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message } | AppError::Internal { message } => message,
        }
    }
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        AppError::internal(e.to_string())
    }
}

impl From<LimitExceeded> for AppError {
    fn from(e: LimitExceeded) -> Self {
        AppError::bad_request(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            message: self.message().to_string(),
            error_code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

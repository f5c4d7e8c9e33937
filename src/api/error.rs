//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::error::NotefulError;

/// Everything a handler can fail with, mapped onto a status code and body.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Create payload without a usable `name`.
    #[error("Invalid data")]
    InvalidData,

    /// Update payload without any recognized field set.
    #[error("{message}")]
    MissingFields { message: &'static str },

    /// Well-formed JSON with a field of the wrong type.
    #[error("{message}")]
    InvalidField { message: String },

    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error(transparent)]
    Internal(#[from] NotefulError),
}

impl ApiError {
    pub fn not_found(resource: &'static str) -> Self {
        ApiError::NotFound { resource }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidData
            | ApiError::MissingFields { .. }
            | ApiError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// `{ "error": { "message": "..." } }`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorMessage,
}

#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorMessage {
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        match self {
            ApiError::InvalidData => (status, message).into_response(),
            ApiError::MissingFields { .. }
            | ApiError::InvalidField { .. }
            | ApiError::NotFound { .. } => {
                (status, Json(ErrorBody::new(message))).into_response()
            }
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "request failed");
                (status, Json(ErrorBody::new("server error"))).into_response()
            }
        }
    }
}

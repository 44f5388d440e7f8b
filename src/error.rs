//! Unified API error handling
//!
//! `ApiError` lets handlers bail with `?` and still answer with the
//! standard envelope shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::reply;
use crate::sink::AxumSink;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log internal errors with full detail; the body never carries it
        match &self {
            Self::Internal(e) => {
                tracing::error!(error = ?e, "internal server error");
            }
            _ => {
                tracing::warn!(error = %self, "api error");
            }
        }

        let sink = AxumSink::new();
        match self {
            Self::BadRequest(msg) => reply::client_error(sink, msg, None, None),
            Self::Unauthorized(msg) => reply::unauthorized(sink, msg),
            Self::Forbidden(msg) => reply::forbidden(sink, msg),
            Self::NotFound(msg) => reply::not_found(sink, msg),
            Self::Validation(msg) => reply::validation_error(sink, msg, None),
            Self::Internal(_) => reply::server_error(
                sink,
                reply::FALLBACK_ERROR_MESSAGE,
                reply::SERVER_ERROR_MESSAGE,
            ),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

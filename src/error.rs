//! # Centralized Error Handling
//!
//! This module provides a unified error handling system for the application.
//! It centralizes error logging and HTTP response generation, so handlers only
//! pick the variant and propagate it with `?`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::services::session::SessionError;

/// Central application error type for request handling.
///
/// Session errors are logged automatically, while client errors should be
/// logged at the point of creation if needed.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("session error")]
    Session(#[from] SessionError),

    #[error("bad request: {0}")]
    BadRequest(&'static str),

    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Session(e) = &self {
            error!(?e, "Session error occurred");
        }

        let (status, message) = match self {
            AppError::Session(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Session error"),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        let body = Json(ErrorBody { message });
        (status, body).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;

/// Errors that abort startup before the server begins listening.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("`SESSION_SECRET` or `SESSION_SECRET_FILE` must be set")]
    MissingSessionSecret,

    #[error("failed to bind or serve: {0}")]
    Io(#[from] std::io::Error),
}

//! Error types for the HTTP front end.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::LogError;

/// Failures while serving a single request.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body could not be decoded.
    #[error("{0}")]
    InvalidInput(String),

    /// The reply could not be encoded.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The log rejected the operation.
    #[error(transparent)]
    Log(#[from] LogError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Log(LogError::KeyNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("request failed: {}", self);
        } else {
            log::warn!("request rejected ({}): {}", status, self);
        }
        (status, format!("{}\n", self)).into_response()
    }
}

/// Failures that stop the server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Binding or serving the listener failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

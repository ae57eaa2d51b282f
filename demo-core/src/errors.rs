use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::response::write_error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DemoError {
    fn from(err: serde_json::Error) -> Self {
        DemoError::Serialization(err.to_string())
    }
}

pub type DemoResult<T> = Result<T, DemoError>;

/// Errors a handler turns into an `{"error": ...}` response.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("Status=404, NotFound: {0}")]
    NotFound(String),

    #[error("Status=500, InternalServerError: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        let status = self.status();
        let message = match self {
            ApiError::NotFound(message) | ApiError::Internal(message) => message,
        };

        write_error(status, message)
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::middlewares::auth::AuthError;

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred while processing your request";
pub const TEXT_TOO_SHORT_MESSAGE: &str =
    "Source text is too short to generate meaningful questions";
pub const CONTEXT_TOO_LARGE_MESSAGE: &str =
    "The provided context is too large. Please reduce the amount of context data.";

/// Every failure the service reports to its caller.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Unauthorized(#[from] AuthError),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("{}", TEXT_TOO_SHORT_MESSAGE)]
    TextTooShort,

    #[error("{}", CONTEXT_TOO_LARGE_MESSAGE)]
    ContextTooLarge,

    #[error("Resource not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Detail stays in the logs, the caller only sees the generic message.
    #[error("{}", INTERNAL_ERROR_MESSAGE)]
    Internal(anyhow::Error),
}

impl ServiceError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ServiceError::InvalidRequest(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServiceError::InvalidRequest(_)
            | ServiceError::TextTooShort
            | ServiceError::ContextTooLarge => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::Unauthorized(_) => "unauthorized",
            ServiceError::InvalidRequest(_) => "invalid_request",
            ServiceError::TextTooShort => "text_too_short",
            ServiceError::ContextTooLarge => "context_too_large",
            ServiceError::NotFound => "not_found",
            ServiceError::MethodNotAllowed => "method_not_allowed",
            ServiceError::Internal(_) => "internal_error",
        }
    }
}

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        ServiceError::Internal(err)
    }
}

/// `{ "success": false, "error": { "code", "message" } }`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if let ServiceError::Internal(ref source) = self {
            tracing::error!("Internal error: {:#}", source);
        }

        let status = self.status_code();
        let body = ErrorEnvelope::new(self.error_code(), self.to_string());
        (status, Json(body)).into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

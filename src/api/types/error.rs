//! API error responses in the envelope format

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::response::ApiResponse;
use crate::domain::{DomainError, FieldErrors};

/// API error with an HTTP status and envelope body
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub errors: Option<FieldErrors>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: None,
        }
    }

    /// Attach a field -> message map
    pub fn with_fields(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.errors {
            Some(errors) => ApiResponse::<()>::error_with_fields(self.message, errors),
            None => ApiResponse::<()>::error(self.message),
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { errors } => {
                Self::bad_request("Validation failed.").with_fields(errors)
            }
            DomainError::Conflict { .. } => Self::conflict("Email already exists."),
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Configuration { message }
            | DomainError::Storage { message }
            | DomainError::Internal { message } => {
                // Store and configuration details stay in the logs
                tracing::error!(error = %message, "Internal error");
                Self::internal("Internal server error.")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

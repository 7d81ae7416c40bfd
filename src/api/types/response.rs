//! Response envelope shared by all user endpoints

use serde::Serialize;

use crate::domain::FieldErrors;

/// Envelope wrapping every response:
/// `{ success, data, message, errors? }`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope with a payload
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            errors: None,
        }
    }

    /// Failure envelope with `data: null`
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
            errors: None,
        }
    }

    /// Failure envelope carrying a field -> message map
    pub fn error_with_fields(message: impl Into<String>, errors: FieldErrors) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
            errors: Some(errors),
        }
    }
}

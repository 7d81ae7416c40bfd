//! Custom JSON extractor that returns rejections in the envelope format

use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::response::ApiResponse;

/// Wrapper around `axum::Json` that converts deserialization failures
/// into a 400 envelope response instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection carrying the envelope body
#[derive(Debug)]
pub struct JsonRejection {
    message: String,
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        // Malformed input is a 400 regardless of which stage of body
        // handling failed
        (
            StatusCode::BAD_REQUEST,
            AxumJson(ApiResponse::<()>::error(self.message)),
        )
            .into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(JsonRejection {
                message: rejection_message(&rejection),
            }),
        }
    }
}

fn rejection_message(rejection: &axum::extract::rejection::JsonRejection) -> String {
    use axum::extract::rejection::JsonRejection::*;

    match rejection {
        JsonSyntaxError(_) | JsonDataError(_) => "Invalid JSON format.".to_string(),
        MissingJsonContentType(_) => {
            "Missing Content-Type header. Expected 'application/json'.".to_string()
        }
        _ => "Invalid request body.".to_string(),
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_is_400_envelope() {
        let rejection = JsonRejection {
            message: "Invalid JSON format.".to_string(),
        };

        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_json_deref() {
        let json = Json("hello".to_string());
        assert_eq!(*json, "hello");
    }

    #[test]
    fn test_json_into_inner() {
        let json = Json(42);
        assert_eq!(json.into_inner(), 42);
    }
}

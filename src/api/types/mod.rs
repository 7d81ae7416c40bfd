//! Shared API types: the response envelope, error type, and JSON
//! extractor used by every endpoint.

pub mod error;
pub mod json;
pub mod response;

pub use error::ApiError;
pub use json::Json;
pub use response::ApiResponse;

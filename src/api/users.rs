//! User endpoints: create, list, analytics

use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::debug;

use super::state::AppState;
use super::types::{ApiError, ApiResponse, Json};
use crate::domain::user::{User, UserAnalytics, UserStatus};
use crate::infrastructure::user::CreateUserRequest;

/// Body for `POST /users`. Fields are optional at the transport layer;
/// validation decides what is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}

/// Query parameters for `GET /users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUsersQuery {
    pub status: Option<String>,
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserBody>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    debug!(email = body.email.as_deref(), "Creating user");

    let request = CreateUserRequest {
        name: body.name,
        email: body.email,
        status: body.status,
    };

    let user = state.user_service.create(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(user, "User created successfully.")),
    ))
}

/// GET /users?status=active|inactive
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let status = match query.status.as_deref() {
        Some(raw) => Some(raw.parse::<UserStatus>().map_err(|_| {
            ApiError::bad_request("Invalid status parameter. Must be \"active\" or \"inactive\".")
        })?),
        None => None,
    };

    debug!(status = ?status, "Listing users");

    let users = state.user_service.list(status).await?;

    Ok(Json(ApiResponse::ok(
        users,
        "Users retrieved successfully.",
    )))
}

/// GET /users/analytics
pub async fn user_analytics(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<UserAnalytics>>, ApiError> {
    debug!("Computing user analytics");

    let analytics = state.analytics_service.compute().await?;

    Ok(Json(ApiResponse::ok(
        analytics,
        "Analytics retrieved successfully.",
    )))
}

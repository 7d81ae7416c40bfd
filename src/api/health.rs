//! Health check endpoints for liveness and readiness probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use super::state::AppState;
use super::types::Json;

/// Health response with optional store check detail
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub latency_ms: u64,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    };

    (StatusCode::OK, Json(response))
}

/// Liveness check for process supervision
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Readiness check - verifies the store answers a count query
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();

    let store_check = match state.user_service.count().await {
        Ok(_) => HealthCheck {
            name: "user_store".to_string(),
            status: HealthStatus::Healthy,
            message: None,
            latency_ms: start.elapsed().as_millis() as u64,
        },
        Err(e) => HealthCheck {
            name: "user_store".to_string(),
            status: HealthStatus::Unhealthy,
            message: Some(e.to_string()),
            latency_ms: start.elapsed().as_millis() as u64,
        },
    };

    let overall = store_check.status;
    let response = HealthResponse {
        status: overall,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(vec![store_check]),
    };

    let status_code = match overall {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

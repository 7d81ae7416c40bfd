//! User Directory API
//!
//! A REST API for managing user records:
//! - Create and list users (with optional status filter)
//! - Creation analytics: total count, recent-window count, and an
//!   average-per-day creation rate
//!
//! PostgreSQL backs the record store; an in-memory store backs tests.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use api::AppState;
use infrastructure::user::{AnalyticsService, PostgresUserRepository, UserService};

/// Connect to PostgreSQL and run pending migrations
pub async fn connect_pool(config: &AppConfig) -> anyhow::Result<PgPool> {
    let database_url = config
        .database_url()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required (env var or database.url)"))?;

    info!("Connecting to PostgreSQL...");
    let pool = PgPool::connect(&database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("PostgreSQL connection established");

    Ok(pool)
}

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = connect_pool(config).await?;

    let repository = Arc::new(PostgresUserRepository::new(pool));
    let user_service = Arc::new(UserService::new(repository.clone()));
    let analytics_service = Arc::new(AnalyticsService::new(repository));

    Ok(AppState::new(user_service, analytics_service))
}

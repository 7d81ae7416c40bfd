//! Seed command - loads fixture users into the database

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::user::{seed, PostgresUserRepository};

/// Connect to the database and insert the fixture users
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let pool = crate::connect_pool(&config).await?;
    let repository = PostgresUserRepository::new(pool);

    let inserted = seed::load_fixtures(&repository).await?;
    info!("Seed complete: {} users inserted", inserted);

    Ok(())
}

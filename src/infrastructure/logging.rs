//! Tracing subscriber setup

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::{LogFormat, LoggingConfig};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).init(),
    }

    tracing::info!(level = %config.level, "Logging initialized");
}

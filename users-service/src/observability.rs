//! Structured logging

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Build the log filter from the configured level
///
/// An unparsable directive falls back to `info`.
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize JSON log output for the process
///
/// Only the first call installs a subscriber; later calls are ignored.
pub fn init_tracing(config: &Config) {
    let installed = tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter(config))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Tracing initialized for service: {}", config.service.name);
    }
}

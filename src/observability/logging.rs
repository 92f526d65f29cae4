//! # Logging
//!
//! Installs the global `tracing` subscriber.
//!
//! `RUST_LOG` takes precedence; otherwise the configured `LOG_LEVEL` applies to
//! the whole process. Violations are emitted at WARN with a `seed_job` field, so
//! the default INFO level always shows them.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::ValidatorConfig;

/// Initialize the global tracing subscriber from configuration
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init_tracing(config: &ValidatorConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.json_logs() {
        builder
            .json()
            .with_current_span(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
    } else {
        builder
            .with_ansi(config.log_enable_color)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
    }
}

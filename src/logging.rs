//! Logging Setup
//!
//! Tracing goes to stderr so that stdout stays reserved for the tools'
//! own output (conversion results and the populate audit script).
//!
//! `RUST_LOG` takes precedence when set; otherwise `KEYSEED_LOG_LEVEL`
//! (default: info) scopes the filter to this crate.

use std::env;
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to initialize logging: {0}")]
    InitFailed(String),
}

/// Initialize the logging system with an explicit crate-level filter.
pub fn init_logging(level: &str) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("keyseed={}", level.to_lowercase())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| LoggingError::InitFailed(e.to_string()))?;

    Ok(())
}

/// Initialize logging from the `KEYSEED_LOG_LEVEL` environment variable.
pub fn init_from_env() -> Result<(), LoggingError> {
    let level = env::var("KEYSEED_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init_logging(&level)
}

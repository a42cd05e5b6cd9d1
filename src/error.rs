//! Common Error Types
//!
//! Root error type aggregating the per-module errors. Conversion and
//! key-file faults are fatal; request failures never reach this type --
//! the populator records them per player and keeps going.

use thiserror::Error;

/// Root error type for the keyseed tools
#[derive(Debug, Error)]
pub enum KeyseedError {
    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging errors
    #[error("logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Hex conversion errors
    #[error("conversion error: {0}")]
    Convert(#[from] crate::convert::ConvertError),

    /// Players file errors
    #[error("players file error: {0}")]
    Keyfile(#[from] crate::keyfile::KeyfileError),

    /// Populate run errors
    #[error("populate error: {0}")]
    Populate(#[from] crate::populate::PopulateError),

    /// API errors
    #[error("API error: {0}")]
    Api(#[from] crate::api::ApiError),
}

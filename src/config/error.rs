//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Cache mode must be `redis` or `memory`.
    #[error("invalid cache mode '{value}': expected 'redis' or 'memory'")]
    InvalidCacheMode { value: String },

    /// A duration setting parsed to zero.
    #[error("{name} must be greater than zero")]
    ZeroDuration { name: &'static str },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },
}

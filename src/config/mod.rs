//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `PARROT_*` environment
//! variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Which cache store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    /// A standalone Redis node (the default).
    Redis,
    /// The in-process store, for single-node runs without Redis.
    Memory,
}

impl CacheMode {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(CacheMode::Redis),
            "memory" => Ok(CacheMode::Memory),
            _ => Err(ConfigError::InvalidCacheMode {
                value: value.to_string(),
            }),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PARROT_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `5000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Cache store selection. Default: `redis`.
    pub cache_mode: CacheMode,

    /// Redis endpoint URL. Default: `redis://127.0.0.1:6379`.
    pub redis_url: String,

    /// SQLite ledger database path. Default: `./.data/ledger.db`.
    pub ledger_path: PathBuf,

    /// Ollama endpoint URL. Default: `http://127.0.0.1:11434`.
    pub ollama_url: String,

    /// Ollama model name. Default: `tinyllama:latest`.
    pub ollama_model: String,

    /// End-to-end timeout for one generate call. Default: 15 s.
    pub generate_timeout: Duration,

    /// TTL applied to every cache write. Default: 3600 s.
    pub answer_ttl: Duration,
}

/// Default Redis URL used when `PARROT_REDIS_URL` is not set.
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

/// Default Ollama URL used when `PARROT_OLLAMA_URL` is not set.
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            cache_mode: CacheMode::Redis,
            redis_url: DEFAULT_REDIS_URL.to_string(),
            ledger_path: PathBuf::from("./.data/ledger.db"),
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            ollama_model: "tinyllama:latest".to_string(),
            generate_timeout: Duration::from_secs(15),
            answer_ttl: Duration::from_secs(3600),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "PARROT_PORT";
    const ENV_BIND_ADDR: &'static str = "PARROT_BIND_ADDR";
    const ENV_CACHE_MODE: &'static str = "PARROT_CACHE_MODE";
    const ENV_REDIS_URL: &'static str = "PARROT_REDIS_URL";
    const ENV_LEDGER_PATH: &'static str = "PARROT_LEDGER_PATH";
    const ENV_OLLAMA_URL: &'static str = "PARROT_OLLAMA_URL";
    const ENV_OLLAMA_MODEL: &'static str = "PARROT_OLLAMA_MODEL";
    const ENV_GENERATE_TIMEOUT_SECS: &'static str = "PARROT_GENERATE_TIMEOUT_SECS";
    const ENV_ANSWER_TTL_SECS: &'static str = "PARROT_ANSWER_TTL_SECS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let cache_mode = Self::parse_cache_mode_from_env(defaults.cache_mode)?;
        let redis_url = Self::parse_string_from_env(Self::ENV_REDIS_URL, defaults.redis_url);
        let ledger_path = Self::parse_path_from_env(Self::ENV_LEDGER_PATH, defaults.ledger_path);
        let ollama_url = Self::parse_string_from_env(Self::ENV_OLLAMA_URL, defaults.ollama_url);
        let ollama_model =
            Self::parse_string_from_env(Self::ENV_OLLAMA_MODEL, defaults.ollama_model);
        let generate_timeout = Self::parse_secs_from_env(
            Self::ENV_GENERATE_TIMEOUT_SECS,
            defaults.generate_timeout,
        );
        let answer_ttl = Self::parse_secs_from_env(Self::ENV_ANSWER_TTL_SECS, defaults.answer_ttl);

        Ok(Self {
            port,
            bind_addr,
            cache_mode,
            redis_url,
            ledger_path,
            ollama_url,
            ollama_model,
            generate_timeout,
            answer_ttl,
        })
    }

    /// Validates basic invariants (does not create files or directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ledger_path.exists() && !self.ledger_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.ledger_path.clone(),
            });
        }

        if self.generate_timeout.is_zero() {
            return Err(ConfigError::ZeroDuration {
                name: "generate timeout",
            });
        }

        if self.answer_ttl.is_zero() {
            return Err(ConfigError::ZeroDuration { name: "answer TTL" });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_cache_mode_from_env(default: CacheMode) -> Result<CacheMode, ConfigError> {
        match env::var(Self::ENV_CACHE_MODE) {
            Ok(value) => CacheMode::parse(&value),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_secs_from_env(var_name: &str, default: Duration) -> Duration {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(default)
    }
}

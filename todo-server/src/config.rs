//! Server configuration read from the environment

use std::net::SocketAddr;
use thiserror::Error;

/// Listen address used when `TODO_BIND_ADDR` is unset
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Default log directives used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "todo_server=debug,tower_http=debug";

const BIND_ADDR_VAR: &str = "TODO_BIND_ADDR";
const CORS_ORIGINS_VAR: &str = "TODO_CORS_ORIGINS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Which browser origins may call the API
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CorsOrigins {
    /// Localhost origins used during development
    #[default]
    Localhost,

    /// Any origin (`*`)
    Any,

    /// An explicit allow-list
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parse a `TODO_CORS_ORIGINS` value: `*` or a comma-separated list
    pub fn parse(value: &str) -> Self {
        if value.trim() == "*" {
            return Self::Any;
        }
        Self::List(
            value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        )
    }
}

/// Startup configuration for the server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub cors: CorsOrigins,
}

impl ServerConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let addr = addr
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                key: BIND_ADDR_VAR.to_string(),
                message: e.to_string(),
            })?;

        let cors = lookup(CORS_ORIGINS_VAR)
            .map(|origins| CorsOrigins::parse(&origins))
            .unwrap_or_default();

        Ok(Self { addr, cors })
    }
}

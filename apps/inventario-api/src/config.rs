//! Inventario API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                        | Default             |
//! |---------------------------------|---------------------|
//! | `INVENTARIO_HTTP_PORT`          | `8080`              |
//! | `INVENTARIO_BIND_ADDR`          | `0.0.0.0`           |
//! | `INVENTARIO_DB_PATH`            | `./inventario.db`   |
//! | `INVENTARIO_DB_MAX_CONNECTIONS` | `5`                 |

use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Inventario API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// HTTP server port
    pub http_port: u16,

    /// Address the HTTP listener binds to
    pub bind_addr: IpAddr,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Upper bound of the connection pool
    pub db_max_connections: u32,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    ///
    /// `load()` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ApiConfig {
            http_port: parse_or(&lookup, "INVENTARIO_HTTP_PORT", 8080)?,

            bind_addr: parse_or(&lookup, "INVENTARIO_BIND_ADDR", IpAddr::from([0, 0, 0, 0]))?,

            database_path: lookup("INVENTARIO_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./inventario.db")),

            db_max_connections: parse_or(&lookup, "INVENTARIO_DB_MAX_CONNECTIONS", 5)?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "INVENTARIO_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(config)
    }

    /// Socket address for the HTTP listener.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.http_port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Catalog JSON file; the bundled catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// PostgreSQL connection string; scores stay in memory when unset
    pub database_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_value =
            non_empty("FONTGAME_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_value
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: "FONTGAME_BIND_ADDR",
                value: bind_value.clone(),
            })?;

        let config = Self {
            bind_addr,
            catalog_path: non_empty("FONTGAME_CATALOG").map(PathBuf::from),
            database_url: non_empty("DATABASE_URL"),
        };

        debug!(
            bind_addr = %config.bind_addr,
            catalog_path = ?config.catalog_path,
            has_database = config.database_url.is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }
}

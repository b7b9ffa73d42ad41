//! User service configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use common::DatabaseConfig;
use thiserror::Error;

/// Environment variable selecting the repository adapter.
pub const STORAGE_ENV: &str = "USER_SERVICE_STORAGE";

/// Configuration that cannot be used to start the service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid USER_SERVICE_STORAGE: {0}")]
    InvalidStorage(String),
}

/// Which repository adapter backs the use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Process-local map, lost on restart
    Memory,
    /// SeaORM over Postgres
    #[default]
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            other => Err(format!("unknown storage backend '{other}'")),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => f.write_str("memory"),
            StorageBackend::Postgres => f.write_str("postgres"),
        }
    }
}

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Repository adapter selection
    pub storage: StorageBackend,
    /// Connection settings, used when `storage` is Postgres
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// An unrecognised `USER_SERVICE_STORAGE` value is an error rather than a
    /// silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut database = DatabaseConfig::from_env();
        if let Ok(url) = env::var("USER_SERVICE_DATABASE_URL") {
            database.url = url;
        }

        let storage = storage_from(env::var(STORAGE_ENV).ok().as_deref())?;

        Ok(Self { storage, database })
    }
}

/// Resolve the storage backend from an optional raw setting.
pub fn storage_from(raw: Option<&str>) -> Result<StorageBackend, ConfigError> {
    match raw {
        Some(value) => value.parse().map_err(ConfigError::InvalidStorage),
        None => Ok(StorageBackend::default()),
    }
}

//! HTTP API configuration.

use std::env;

use common::{parse_env, ServiceConfig};
use user_service_lib::config::{ConfigError, StorageBackend, UserServiceConfig};

/// HTTP API configuration.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    /// Bind address and logging defaults
    pub service: ServiceConfig,
    /// Storage settings for the embedded user service
    pub users: UserServiceConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = ServiceConfig::default();
        Ok(Self {
            service: ServiceConfig {
                service_name: defaults.service_name,
                host: env::var("API_HOST").unwrap_or(defaults.host),
                port: parse_env("API_PORT").unwrap_or(defaults.port),
            },
            users: UserServiceConfig::from_env()?,
        })
    }

    /// Config for tests and local runs: in-memory storage, default bind address.
    pub fn in_memory() -> Self {
        let mut config = Self::default();
        config.users.storage = StorageBackend::Memory;
        config
    }
}

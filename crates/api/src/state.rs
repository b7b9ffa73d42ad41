//! Application state for dependency injection.

use user_service_lib::config::StorageBackend;
use user_service_lib::infra::Database;
use user_service_lib::{UserModule, UserUseCases};

use crate::config::ApiConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: UserUseCases,
    pub database: Option<Database>,
    pub config: ApiConfig,
}

impl AppState {
    /// Create new app state from a wired user module.
    pub fn new(module: UserModule, config: ApiConfig) -> Self {
        Self {
            users: module.use_cases,
            database: module.database,
            config,
        }
    }

    pub fn storage(&self) -> StorageBackend {
        if self.database.is_some() {
            StorageBackend::Postgres
        } else {
            StorageBackend::Memory
        }
    }
}

//! User Service Library
//!
//! The user use cases together with the repository adapters that can back
//! them. The HTTP crate wires one of the adapters in through [`UserModule`].

pub mod config;
pub mod infra;
pub mod repository;
pub mod usecases;

use std::sync::Arc;

use sea_orm::DbErr;
use tracing::info;

use crate::config::{StorageBackend, UserServiceConfig};
use crate::infra::Database;
use crate::repository::{InMemoryUserRepository, UserStore};

pub use crate::usecases::UserUseCases;

/// Use cases plus the database handle when storage is Postgres.
#[derive(Clone)]
pub struct UserModule {
    pub use_cases: UserUseCases,
    pub database: Option<Database>,
}

impl UserModule {
    /// Wire the use cases to a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self {
            use_cases: UserUseCases::new(Arc::new(InMemoryUserRepository::new())),
            database: None,
        }
    }

    /// Wire the use cases to the configured storage backend.
    pub async fn connect(config: &UserServiceConfig) -> Result<Self, DbErr> {
        match config.storage {
            StorageBackend::Memory => {
                info!("Using in-memory user storage");
                Ok(Self::in_memory())
            }
            StorageBackend::Postgres => {
                let db = Database::connect(&config.database).await?;
                let repo = Arc::new(UserStore::new(db.get_connection()));
                Ok(Self {
                    use_cases: UserUseCases::new(repo),
                    database: Some(db),
                })
            }
        }
    }
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    action: MigrateAction,
    config: &UserServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

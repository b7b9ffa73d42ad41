//! Application use cases for the user domain.
//!
//! Each use case runs one linear sequence: validate input into value objects,
//! check business rules against the repository, persist, then project the
//! entity into a [`UserRecord`](domain::UserRecord). Errors propagate unchanged.

mod create_user;
mod delete_user;
mod get_all_users;
mod get_user;
mod update_user;

use std::sync::Arc;

use domain::UserRepository;

pub use create_user::{CreateUserInput, CreateUserUseCase};
pub use delete_user::{DeleteUserInput, DeleteUserUseCase};
pub use get_all_users::GetAllUsersUseCase;
pub use get_user::{GetUserInput, GetUserUseCase};
pub use update_user::{UpdateUserInput, UpdateUserUseCase};

/// The five user use cases wired to one repository.
#[derive(Clone)]
pub struct UserUseCases {
    pub create: CreateUserUseCase,
    pub get: GetUserUseCase,
    pub get_all: GetAllUsersUseCase,
    pub update: UpdateUserUseCase,
    pub delete: DeleteUserUseCase,
}

impl UserUseCases {
    /// Build every use case over the same repository adapter
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            create: CreateUserUseCase::new(repo.clone()),
            get: GetUserUseCase::new(repo.clone()),
            get_all: GetAllUsersUseCase::new(repo.clone()),
            update: UpdateUserUseCase::new(repo.clone()),
            delete: DeleteUserUseCase::new(repo),
        }
    }
}

//! Create a user after checking that the email is free.

use std::sync::Arc;

use domain::{
    DomainError, Email, User, UserName, UserRecord, UserRepository, UserResult,
};

/// Input for [`CreateUserUseCase`]
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub email: String,
    pub name: String,
}

#[derive(Clone)]
pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Persist a new user. Exactly one record is written on success, none on failure.
    ///
    /// The duplicate check and the save are two separate repository calls, so
    /// concurrent callers can both pass the check. Only a storage-level unique
    /// constraint closes that gap.
    pub async fn execute(&self, input: CreateUserInput) -> UserResult<UserRecord> {
        let email = Email::new(input.email)?;
        let name = UserName::new(input.name)?;

        if self.repo.exists_by_email(&email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let saved = self.repo.save(User::create(email, name)).await?;
        Ok(saved.to_record()?)
    }
}

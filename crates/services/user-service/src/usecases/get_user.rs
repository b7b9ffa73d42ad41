//! Look up a single user by id.

use std::sync::Arc;

use domain::{UserId, UserRecord, UserRepository, UserResult};

/// Input for [`GetUserUseCase`]
#[derive(Debug, Clone, Copy)]
pub struct GetUserInput {
    pub id: i64,
}

#[derive(Clone)]
pub struct GetUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Returns `Ok(None)` when no user has the id; "not found" is not a failure here.
    pub async fn execute(&self, input: GetUserInput) -> UserResult<Option<UserRecord>> {
        let id = UserId::new(input.id)?;

        match self.repo.find_by_id(id).await? {
            Some(user) => Ok(Some(user.to_record()?)),
            None => Ok(None),
        }
    }
}

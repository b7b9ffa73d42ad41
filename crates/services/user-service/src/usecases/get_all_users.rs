//! List every persisted user.

use std::sync::Arc;

use domain::{UserRecord, UserRepository, UserResult};

#[derive(Clone)]
pub struct GetAllUsersUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetAllUsersUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Project every user in repository order. An empty store yields an empty list.
    pub async fn execute(&self) -> UserResult<Vec<UserRecord>> {
        let users = self.repo.find_all().await?;

        let records = users
            .iter()
            .map(|user| user.to_record())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}

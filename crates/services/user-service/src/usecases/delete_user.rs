//! Delete a user after verifying it exists.

use std::sync::Arc;

use domain::{DomainError, UserId, UserRepository, UserResult};

/// Input for [`DeleteUserUseCase`]
#[derive(Debug, Clone, Copy)]
pub struct DeleteUserInput {
    pub id: i64,
}

#[derive(Clone)]
pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: DeleteUserInput) -> UserResult<()> {
        let id = UserId::new(input.id)?;

        if self.repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::UserNotFound.into());
        }

        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Email, MockUserRepository, User, UserError, UserName};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_delete_user_success() {
        let id = UserId::new(1).unwrap();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().with(eq(id)).returning(|id| {
            Ok(Some(User::reconstruct(
                id,
                Email::new("a@x.com").unwrap(),
                UserName::new("A").unwrap(),
            )))
        });
        repo.expect_delete().with(eq(id)).times(1).returning(|_| Ok(()));

        let use_case = DeleteUserUseCase::new(Arc::new(repo));
        tokio_test::assert_ok!(use_case.execute(DeleteUserInput { id: 1 }).await);
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_delete().never();

        let use_case = DeleteUserUseCase::new(Arc::new(repo));
        let err = use_case
            .execute(DeleteUserInput { id: 999 })
            .await
            .unwrap_err();

        assert_eq!(err, UserError::Domain(DomainError::UserNotFound));
        assert_eq!(err.to_string(), "User not found");
    }

    #[tokio::test]
    async fn test_delete_user_invalid_id() {
        let repo = MockUserRepository::new();

        let use_case = DeleteUserUseCase::new(Arc::new(repo));
        let result = use_case.execute(DeleteUserInput { id: 0 }).await;

        tokio_test::assert_err!(result);
    }
}

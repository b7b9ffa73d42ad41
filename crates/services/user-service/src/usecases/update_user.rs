//! Partially update a user's email and/or name.

use std::sync::Arc;

use domain::{
    DomainError, Email, UserId, UserName, UserRecord, UserRepository, UserResult,
};

/// Input for [`UpdateUserUseCase`]. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub id: i64,
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone)]
pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Apply the provided fields and persist.
    ///
    /// The duplicate-email check runs before the entity's same-value check:
    /// an email held by another user fails with "Email already exists", while
    /// the user's own current email fails inside `change_email`.
    pub async fn execute(&self, input: UpdateUserInput) -> UserResult<UserRecord> {
        let id = UserId::new(input.id)?;

        let mut user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        if let Some(email) = input.email {
            let new_email = Email::new(email)?;
            let exists = self.repo.exists_by_email(&new_email).await?;
            if exists && user.email() != &new_email {
                return Err(DomainError::EmailAlreadyExists.into());
            }
            user.change_email(new_email)?;
        }

        if let Some(name) = input.name {
            user.change_name(UserName::new(name)?)?;
        }

        let updated = self.repo.update(user).await?;
        Ok(updated.to_record()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{MockUserRepository, User, UserError, ValidationError};

    fn stored(id: i64, email: &str, name: &str) -> User {
        User::reconstruct(
            UserId::new(id).unwrap(),
            Email::new(email).unwrap(),
            UserName::new(name).unwrap(),
        )
    }

    fn repo_with_user() -> MockUserRepository {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(stored(id.value(), "a@x.com", "A"))));
        repo
    }

    #[tokio::test]
    async fn test_update_user_name_only() {
        let mut repo = repo_with_user();
        repo.expect_exists_by_email().never();
        repo.expect_update()
            .withf(|user| user.name().value() == "B" && user.email().value() == "a@x.com")
            .times(1)
            .returning(|user| Ok(user));

        let use_case = UpdateUserUseCase::new(Arc::new(repo));
        let record = use_case
            .execute(UpdateUserInput {
                id: 1,
                name: Some("B".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(record.email, "a@x.com");
        assert_eq!(record.name, "B");
    }

    #[tokio::test]
    async fn test_update_user_email() {
        let mut repo = repo_with_user();
        repo.expect_exists_by_email().returning(|_| Ok(false));
        repo.expect_update().times(1).returning(|user| Ok(user));

        let use_case = UpdateUserUseCase::new(Arc::new(repo));
        let record = use_case
            .execute(UpdateUserInput {
                id: 1,
                email: Some("new@x.com".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(record.email, "new@x.com");
        assert_eq!(record.name, "A");
    }

    #[tokio::test]
    async fn test_update_user_email_taken_by_someone_else() {
        let mut repo = repo_with_user();
        repo.expect_exists_by_email().returning(|_| Ok(true));
        repo.expect_update().never();

        let use_case = UpdateUserUseCase::new(Arc::new(repo));
        let err = use_case
            .execute(UpdateUserInput {
                id: 1,
                email: Some("taken@x.com".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err, UserError::Domain(DomainError::EmailAlreadyExists));
    }

    #[tokio::test]
    async fn test_update_user_own_email_hits_same_value_rule() {
        let mut repo = repo_with_user();
        // The store reports the email as taken because this user holds it.
        repo.expect_exists_by_email().times(1).returning(|_| Ok(true));
        repo.expect_update().never();

        let use_case = UpdateUserUseCase::new(Arc::new(repo));
        let err = use_case
            .execute(UpdateUserInput {
                id: 1,
                email: Some("a@x.com".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err, UserError::Domain(DomainError::SameEmail));
    }

    #[tokio::test]
    async fn test_update_user_same_name() {
        let mut repo = repo_with_user();
        repo.expect_update().never();

        let use_case = UpdateUserUseCase::new(Arc::new(repo));
        let err = use_case
            .execute(UpdateUserInput {
                id: 1,
                name: Some("A".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "New name is the same as current name");
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let use_case = UpdateUserUseCase::new(Arc::new(repo));
        let err = use_case
            .execute(UpdateUserInput {
                id: 42,
                name: Some("B".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err, UserError::Domain(DomainError::UserNotFound));
    }

    #[tokio::test]
    async fn test_update_user_invalid_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().never();

        let use_case = UpdateUserUseCase::new(Arc::new(repo));
        let err = use_case
            .execute(UpdateUserInput {
                id: -5,
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err, UserError::Validation(ValidationError::InvalidUserId));
    }

    #[tokio::test]
    async fn test_update_user_without_fields_still_writes() {
        let mut repo = repo_with_user();
        repo.expect_update().times(1).returning(|user| Ok(user));

        let use_case = UpdateUserUseCase::new(Arc::new(repo));
        let record = use_case
            .execute(UpdateUserInput {
                id: 1,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(record.name, "A");
    }

    #[tokio::test]
    async fn test_update_user_empty_name_is_provided() {
        let mut repo = repo_with_user();
        repo.expect_update().never();

        let use_case = UpdateUserUseCase::new(Arc::new(repo));
        let err = use_case
            .execute(UpdateUserInput {
                id: 1,
                name: Some(String::new()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err, UserError::Validation(ValidationError::NameRequired));
    }
}

//! Repository port for user persistence.

use async_trait::async_trait;

use crate::error::UserResult;
use crate::user::User;
use crate::value_objects::{Email, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Persistence contract consumed by the use cases.
///
/// Adapters are injected as `Arc<dyn UserRepository>`; the use cases never
/// name a concrete implementation. Failures other than the documented domain
/// errors are reported as [`UserError::Repository`](crate::UserError::Repository).
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a transient user and return it with a freshly assigned, unique id
    async fn save(&self, user: User) -> UserResult<User>;

    /// Find a user by id. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>>;

    /// Every persisted user, in insertion order by convention
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Persist changes to an identified user.
    /// Fails with `DomainError::UpdateWithoutId` for a transient user.
    async fn update(&self, user: User) -> UserResult<User>;

    /// Remove a user. Succeeds silently when the id is unknown.
    async fn delete(&self, id: UserId) -> UserResult<()>;

    /// Whether any persisted user currently holds this email
    async fn exists_by_email(&self, email: &Email) -> UserResult<bool>;
}

//! In-memory implementation of `UserRepository` (for development/testing).

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use domain::{DomainError, Email, User, UserError, UserId, UserRepository, UserResult};

#[derive(Debug)]
struct State {
    users: BTreeMap<UserId, User>,
    next_id: i64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Map-backed repository with ids allocated from a counter starting at 1.
///
/// Ids are never reused, so iterating the map in key order preserves
/// insertion order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.users.is_empty()
    }

    /// Drop every user and restart id allocation at 1
    pub async fn clear(&self) {
        *self.state.write().await = State::default();
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> UserResult<User> {
        let mut state = self.state.write().await;

        let id = UserId::new(state.next_id)?;
        state.next_id += 1;

        let saved = User::reconstruct(id, user.email().clone(), user.name().clone());
        state.users.insert(id, saved.clone());

        tracing::info!(user_id = %id, email = %saved.email(), "Created user");
        Ok(saved)
    }

    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let state = self.state.read().await;
        Ok(state.users.values().cloned().collect())
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let id = user.id().ok_or(DomainError::UpdateWithoutId)?;
        let mut state = self.state.write().await;

        let Some(slot) = state.users.get_mut(&id) else {
            return Err(UserError::repository(format!("no user with id {id}")));
        };
        *slot = user.clone();

        tracing::info!(user_id = %id, "Updated user");
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> UserResult<()> {
        let mut state = self.state.write().await;
        if state.users.remove(&id).is_some() {
            tracing::info!(user_id = %id, "Deleted user");
        }
        Ok(())
    }

    async fn exists_by_email(&self, email: &Email) -> UserResult<bool> {
        let state = self.state.read().await;
        Ok(state.users.values().any(|u| u.email() == email))
    }
}

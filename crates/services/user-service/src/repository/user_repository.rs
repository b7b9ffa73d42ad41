//! SeaORM-backed implementation of `UserRepository`.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use domain::{DomainError, Email, User, UserError, UserId, UserRepository, UserResult};

/// Concrete implementation of UserRepository over a SQL database
#[derive(Clone)]
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_error(err: DbErr) -> UserError {
    UserError::repository(err.to_string())
}

#[async_trait]
impl UserRepository for UserStore {
    async fn save(&self, user: User) -> UserResult<User> {
        let active_model = ActiveModel {
            email: Set(user.email().value().to_string()),
            name: Set(user.name().value().to_string()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        tracing::debug!(user_id = model.id, "Inserted user row");
        User::try_from(model)
    }

    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>> {
        let result = UserEntity::find_by_id(id.value())
            .one(&self.db)
            .await
            .map_err(db_error)?;

        result.map(User::try_from).transpose()
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(User::try_from).collect()
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let id = user.id().ok_or(DomainError::UpdateWithoutId)?;

        let active_model = ActiveModel {
            id: Set(id.value()),
            email: Set(user.email().value().to_string()),
            name: Set(user.name().value().to_string()),
        };

        let model = active_model.update(&self.db).await.map_err(db_error)?;
        tracing::debug!(user_id = model.id, "Updated user row");
        User::try_from(model)
    }

    async fn delete(&self, id: UserId) -> UserResult<()> {
        let result = UserEntity::delete_by_id(id.value())
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        tracing::debug!(user_id = %id, rows = result.rows_affected, "Deleted user row");
        Ok(())
    }

    async fn exists_by_email(&self, email: &Email) -> UserResult<bool> {
        let count = UserEntity::find()
            .filter(user::Column::Email.eq(email.value()))
            .count(&self.db)
            .await
            .map_err(db_error)?;

        Ok(count > 0)
    }
}

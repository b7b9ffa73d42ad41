//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Email, User, UserError, UserId, UserName};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert a database row back into a persisted domain entity.
///
/// Goes through the value object constructors, so a row that violates a
/// domain invariant is reported instead of producing an invalid user.
impl TryFrom<Model> for User {
    type Error = UserError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(User::reconstruct(
            UserId::new(model.id)?,
            Email::new(model.email)?,
            UserName::new(model.name)?,
        ))
    }
}

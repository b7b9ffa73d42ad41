//! User domain entity and its output record.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{Email, UserId, UserName};

/// User aggregate root.
///
/// Built only through [`User::create`] (transient, no id) or
/// [`User::reconstruct`] (persisted, id assigned by storage). The id never
/// changes afterwards; email and name change through the `change_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Option<UserId>,
    email: Email,
    name: UserName,
}

impl User {
    /// Create a transient user that has not been persisted yet
    pub fn create(email: Email, name: UserName) -> Self {
        Self {
            id: None,
            email,
            name,
        }
    }

    /// Rebuild a persisted user from storage
    pub fn reconstruct(id: UserId, email: Email, name: UserName) -> Self {
        Self {
            id: Some(id),
            email,
            name,
        }
    }

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }

    /// Replace the email. Fails when the new email equals the current one.
    pub fn change_email(&mut self, new_email: Email) -> Result<(), DomainError> {
        if self.email == new_email {
            return Err(DomainError::SameEmail);
        }
        self.email = new_email;
        Ok(())
    }

    /// Replace the name. Fails when the new name equals the current one.
    pub fn change_name(&mut self, new_name: UserName) -> Result<(), DomainError> {
        if self.name == new_name {
            return Err(DomainError::SameName);
        }
        self.name = new_name;
        Ok(())
    }

    /// Project into plain values. Only persisted users can be projected.
    pub fn to_record(&self) -> Result<UserRecord, DomainError> {
        let id = self.id.ok_or(DomainError::ProjectWithoutId)?;
        Ok(UserRecord {
            id: id.value(),
            email: self.email.value().to_string(),
            name: self.name.value().to_string(),
        })
    }
}

/// Plain-value projection of a persisted user (safe to return to clients)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserRecord {
    /// Unique user identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    /// User email address
    #[cfg_attr(feature = "openapi", schema(example = "jane@example.com"))]
    pub email: String,
    /// User display name
    #[cfg_attr(feature = "openapi", schema(example = "Jane Doe"))]
    pub name: String,
}

impl TryFrom<&User> for UserRecord {
    type Error = DomainError;

    fn try_from(user: &User) -> Result<Self, Self::Error> {
        user.to_record()
    }
}

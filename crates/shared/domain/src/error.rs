//! Domain-level errors.
//!
//! These errors represent malformed input and business rule violations.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

use crate::constants::*;

/// Raised by a value object constructor when a primitive violates its invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", MSG_EMAIL_REQUIRED)]
    EmailRequired,

    #[error("{}", MSG_NAME_REQUIRED)]
    NameRequired,

    #[error("{}", MSG_INVALID_USER_ID)]
    InvalidUserId,
}

/// Raised when a business rule is violated. Depends on stored state,
/// not merely on the shape of the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Another user already holds the email
    #[error("{}", MSG_EMAIL_ALREADY_EXISTS)]
    EmailAlreadyExists,

    /// No user with the requested id
    #[error("{}", MSG_USER_NOT_FOUND)]
    UserNotFound,

    /// `change_email` called with the current email
    #[error("{}", MSG_SAME_EMAIL)]
    SameEmail,

    /// `change_name` called with the current name
    #[error("{}", MSG_SAME_NAME)]
    SameName,

    /// Projection of a transient user
    #[error("{}", MSG_PROJECT_WITHOUT_ID)]
    ProjectWithoutId,

    /// Repository update of a transient user
    #[error("{}", MSG_UPDATE_WITHOUT_ID)]
    UpdateWithoutId,
}

/// Error returned by every use case and repository operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Unrecoverable failure inside a repository adapter
    #[error("Repository error: {0}")]
    Repository(String),
}

impl UserError {
    /// Create a repository error
    pub fn repository(msg: impl Into<String>) -> Self {
        UserError::Repository(msg.into())
    }
}

/// Result type alias for user operations
pub type UserResult<T> = Result<T, UserError>;

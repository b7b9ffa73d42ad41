//! Domain layer - User entity, value objects and the repository port.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Storage adapters implement [`UserRepository`]; the transport layer only
//! ever sees [`UserRecord`] values and [`UserError`]s.

pub mod constants;
pub mod error;
pub mod repository;
pub mod user;
pub mod value_objects;

pub use constants::*;
pub use error::{DomainError, UserError, UserResult, ValidationError};
#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockUserRepository;
pub use repository::UserRepository;
pub use user::{User, UserRecord};
pub use value_objects::{Email, UserId, UserName};

//! Immutable, self-validating primitives of the user domain.
//!
//! Each value object is built through a fallible constructor and compared
//! structurally (`PartialEq` on the wrapped value).

mod email;
mod user_id;
mod user_name;

pub use email::Email;
pub use user_id::UserId;
pub use user_name::UserName;

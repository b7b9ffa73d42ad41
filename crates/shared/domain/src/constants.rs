//! Domain-level constants.
//!
//! These constants define the fixed, client-visible messages of the user domain
//! and the limits enforced at the transport boundary.

// =============================================================================
// Validation messages
// =============================================================================

/// Raised when an email value object is built from an empty string
pub const MSG_EMAIL_REQUIRED: &str = "Email is required";

/// Raised when a user name value object is built from an empty string
pub const MSG_NAME_REQUIRED: &str = "Name is required";

/// Raised when a user id is zero or negative
pub const MSG_INVALID_USER_ID: &str = "User ID must be a positive number";

// =============================================================================
// Business rule messages
// =============================================================================

pub const MSG_EMAIL_ALREADY_EXISTS: &str = "Email already exists";

pub const MSG_USER_NOT_FOUND: &str = "User not found";

pub const MSG_SAME_EMAIL: &str = "New email is the same as current email";

pub const MSG_SAME_NAME: &str = "New name is the same as current name";

pub const MSG_PROJECT_WITHOUT_ID: &str = "Cannot convert user without ID to object";

pub const MSG_UPDATE_WITHOUT_ID: &str = "Cannot update user without ID";

// =============================================================================
// Storage limits
// =============================================================================

/// Width of the `users.name` column; request validation enforces the same limit
pub const MAX_NAME_LENGTH: u64 = 100;

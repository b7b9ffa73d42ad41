//! Email value object.

use std::fmt;

use crate::error::ValidationError;

/// A non-empty email address.
///
/// Format is not checked here; request validation owns that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Build an email, failing with [`ValidationError::EmailRequired`] on an empty string.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_non_empty_value() {
        let email = Email::new("a@x.com").unwrap();
        assert_eq!(email.value(), "a@x.com");
    }

    #[test]
    fn rejects_empty_string() {
        assert_eq!(Email::new(""), Err(ValidationError::EmailRequired));
    }

    #[test]
    fn does_not_check_format() {
        assert!(Email::new("not-an-email").is_ok());
    }

    #[test]
    fn compares_by_value() {
        let a = Email::new("a@x.com").unwrap();
        let b = Email::new("a@x.com").unwrap();
        let c = Email::new("c@x.com").unwrap();

        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
    }
}

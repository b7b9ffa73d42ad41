//! `{id}` path segment extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use common::{AppError, AppResult};

pub const MSG_ID_NOT_NUMBER: &str = "ID must be a number";

/// A user id taken from the path. Only ASCII digits are accepted here;
/// positivity is checked by the use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        parse_user_id(&raw).map(UserIdPath)
    }
}

/// Parse a path segment made only of digits.
pub fn parse_user_id(raw: &str) -> AppResult<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::validation(MSG_ID_NOT_NUMBER));
    }
    raw.parse::<i64>()
        .map_err(|_| AppError::validation(MSG_ID_NOT_NUMBER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_digits() {
        assert_eq!(parse_user_id("42").unwrap(), 42);
        assert_eq!(parse_user_id("0").unwrap(), 0);
    }

    #[test]
    fn rejects_non_digits() {
        for raw in ["", "-1", "1.5", "abc", " 1", "+3"] {
            let err = parse_user_id(raw).unwrap_err();
            assert_eq!(err.to_string(), MSG_ID_NOT_NUMBER, "input {raw:?}");
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!(parse_user_id("99999999999999999999").is_err());
    }
}

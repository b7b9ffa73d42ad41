//! JSON body extractor that runs `validator` checks before the handler.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use common::{AppError, FieldIssue};

/// Deserialized request body that has passed its field checks.
///
/// Malformed JSON becomes a plain validation error. Failed field checks become
/// [`AppError::InvalidFields`] listing every issue, ordered by field path.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        body.validate()
            .map_err(|errors| AppError::InvalidFields(field_issues(&errors)))?;

        Ok(ValidatedJson(body))
    }
}

/// Flatten `validator` output into issues sorted by path.
pub(crate) fn field_issues(errors: &ValidationErrors) -> Vec<FieldIssue> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .flat_map(|(field, failures)| {
            failures.iter().map(move |failure| FieldIssue {
                path: field.to_string(),
                message: failure
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid")),
            })
        })
        .collect()
}

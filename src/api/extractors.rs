//! Request extractors enforcing validation before handler logic runs.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// JSON body extractor that validates before dispatch.
///
/// Malformed JSON, wrong field types, and failed field validations are
/// all rejected as a 400 carrying one complaint per problem, so invalid
/// input never reaches a handler, the service, or the store.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(vec![rejection.body_text()]))?;

        payload
            .validate()
            .map_err(|errors| AppError::validation(field_messages(&errors)))?;

        Ok(Self(payload))
    }
}

/// Flattens validator output into sorted `"<field>: <complaint>"` lines.
pub fn field_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| match &error.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: invalid value"),
            })
        })
        .collect();

    messages.sort();
    messages
}

//! Extractors that deserialize and then validate the payload.
//!
//! Every violated rule is reported, ordered by field name. Decoding failures
//! (bad JSON, wrong types, unknown enum values) become a single validation
//! message.

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use cuti_core::error::AppError;

use crate::error::ApiError;

const MALFORMED: &str = "Data tidak valid";

/// JSON body that passed `Validate`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

/// Query string that passed `Validate`.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::validation(format!("{MALFORMED}: {}", rejection.body_text()))
            })?;

        value.validate().map_err(into_app_error)?;
        Ok(Self(value))
    }
}

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::validation(format!("{MALFORMED}: {}", rejection.body_text()))
            })?;

        value.validate().map_err(into_app_error)?;
        Ok(Self(value))
    }
}

/// Flattens field and struct-level errors into their messages.
pub fn flatten_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field} tidak valid"),
            })
        })
        .collect()
}

fn into_app_error(errors: ValidationErrors) -> ApiError {
    AppError::validation_fields(flatten_errors(&errors)).into()
}

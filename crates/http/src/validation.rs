//! Request body validation and the extractors that enforce it.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::AppError;

/// One failed constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub error: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            error: error.into(),
        }
    }
}

/// Structural checks a request payload must pass before a handler sees it.
pub trait Validate {
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

/// Accumulates every failing field instead of stopping at the first one.
#[derive(Debug, Default)]
pub struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Character count (not bytes) must lie in `min..=max`.
    pub fn length(mut self, field: &str, value: &str, min: usize, max: usize) -> Self {
        let len = value.chars().count();
        if len == 0 && min > 0 {
            self.errors.push(FieldError::new(field, "must not be empty"));
        } else if len < min {
            self.errors.push(FieldError::new(
                field,
                format!("must be at least {min} characters"),
            ));
        } else if len > max {
            self.errors.push(FieldError::new(
                field,
                format!("must be at most {max} characters"),
            ));
        }
        self
    }

    /// Value must lie strictly between `gt` and `lt`.
    pub fn between(mut self, field: &str, value: i64, gt: i64, lt: i64) -> Self {
        if value <= gt {
            self.errors
                .push(FieldError::new(field, format!("must be greater than {gt}")));
        } else if value >= lt {
            self.errors
                .push(FieldError::new(field, format!("must be less than {lt}")));
        }
        self
    }

    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// JSON body extractor that runs [`Validate`] after deserializing.
///
/// Any parse failure (bad JSON, missing field, wrong type, missing content
/// type) is reported as a validation error, same as a failed constraint.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::validation(
                    vec![FieldError::new("body", rejection.body_text())],
                    "request body could not be parsed",
                )
            })?;

        value
            .validate()
            .map_err(|details| AppError::validation(details, "request body failed validation"))?;

        Ok(Self(value))
    }
}

/// Numeric `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub i64);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::validation(
                    vec![FieldError::new("id", rejection.body_text())],
                    "path parameter could not be parsed",
                )
            })?;

        Ok(Self(id))
    }
}

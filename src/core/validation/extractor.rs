//! Axum extractor for validated entity payloads
//!
//! `Validated<T>` runs the entity's rule table against the request body
//! before the handler sees it, picking the validation mode from the
//! HTTP method.

use super::config::{EntityValidationConfig, ValidationMode};
use super::FieldErrors;
use crate::core::error::{FactureError, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde_json::Value;

/// Trait for entities that support validation
pub trait ValidatableEntity {
    /// Get the validation rule table for this entity type
    fn validation_config() -> EntityValidationConfig;

    /// Strict validation: all required fields must be present
    fn validate_for_create(payload: Value) -> Result<Value, FieldErrors> {
        Self::validation_config().validate_and_filter(ValidationMode::Create, payload)
    }

    /// Partial validation: required fields checked only when present
    fn validate_for_update(payload: Value) -> Result<Value, FieldErrors> {
        Self::validation_config().validate_and_filter(ValidationMode::Update, payload)
    }
}

/// Axum extractor that validates and filters entity payloads
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_product(payload: Validated<Product>) -> Json<Value> {
///     // payload.into_inner() is already validated and normalized
/// }
/// ```
pub struct Validated<T>(pub Value, std::marker::PhantomData<T>);

impl<T> Validated<T> {
    /// Create a new validated payload
    pub fn new(payload: Value) -> Self {
        Self(payload, std::marker::PhantomData)
    }

    /// Get the inner payload
    pub fn into_inner(self) -> Value {
        self.0
    }
}

// Allow dereferencing to Value
impl<T> std::ops::Deref for Validated<T> {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: ValidatableEntity + Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let method = req.method().clone();

        let Json(payload): Json<Value> = match Json::from_request(req, state).await {
            Ok(json) => json,
            Err(e) => {
                return Err(FactureError::Validation(ValidationError::InvalidJson {
                    message: e.to_string(),
                })
                .into_response());
            }
        };

        // POST creates; PUT/PATCH partially update
        let mode = match method.as_str() {
            "PUT" | "PATCH" => ValidationMode::Update,
            _ => ValidationMode::Create,
        };

        T::validation_config()
            .validate_and_filter(mode, payload)
            .map(Validated::new)
            .map_err(|errors| FactureError::from(errors).into_response())
    }
}

//! Typed error handling for the facture core
//!
//! Every failure produced by the gates is a normal, expected outcome to
//! be reported back to the caller: nothing here is retryable (all
//! results are deterministic functions of their input) and nothing is
//! fatal to the process.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: field-indexed input validation failures
//! - [`EntityError`]: record lookup failures, also the shape a denied
//!   ownership check is surfaced as (never revealing existence)
//! - [`PlanNotConfigured`](crate::billing::PlanNotConfigured): missing
//!   provider variant id, wrapped as [`FactureError::Billing`]

use crate::billing::PlanNotConfigured;
use crate::core::validation::FieldErrors;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The main error type for the facture core
#[derive(Debug)]
pub enum FactureError {
    /// Input validation errors
    Validation(ValidationError),

    /// Record-related errors
    Entity(EntityError),

    /// Billing configuration errors
    Billing(PlanNotConfigured),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for FactureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactureError::Validation(e) => write!(f, "{}", e),
            FactureError::Entity(e) => write!(f, "{}", e),
            FactureError::Billing(e) => write!(f, "{}", e),
            FactureError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for FactureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FactureError::Validation(e) => Some(e),
            FactureError::Entity(e) => Some(e),
            FactureError::Billing(e) => Some(e),
            FactureError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl FactureError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            FactureError::Validation(e) => e.status_code(),
            FactureError::Entity(e) => e.status_code(),
            FactureError::Billing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FactureError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            FactureError::Validation(e) => e.error_code(),
            FactureError::Entity(e) => e.error_code(),
            FactureError::Billing(_) => "PLAN_NOT_CONFIGURED",
            FactureError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            FactureError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            FactureError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id.to_string()
                }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for FactureError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// Field-indexed validation report; every failing field is listed
    FieldErrors(FieldErrors),

    /// Invalid JSON body
    InvalidJson { message: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldErrors(errors) => {
                let fields: Vec<&str> = errors.keys().map(|k| k.as_str()).collect();
                write!(f, "Validation failed for fields: {}", fields.join(", "))
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid JSON: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::FieldErrors(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ValidationError::InvalidJson { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
        }
    }
}

impl From<ValidationError> for FactureError {
    fn from(err: ValidationError) -> Self {
        FactureError::Validation(err)
    }
}

impl From<FieldErrors> for FactureError {
    fn from(errors: FieldErrors) -> Self {
        FactureError::Validation(ValidationError::FieldErrors(errors))
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to record operations
#[derive(Debug)]
pub enum EntityError {
    /// Record was not found (or not accessible to the requesting actor)
    NotFound { entity_type: String, id: Uuid },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { entity_type, id } => {
                write!(f, "{} with id '{}' not found", entity_type, id)
            }
        }
    }
}

impl std::error::Error for EntityError {}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
        }
    }
}

impl From<EntityError> for FactureError {
    fn from(err: EntityError) -> Self {
        FactureError::Entity(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<PlanNotConfigured> for FactureError {
    fn from(err: PlanNotConfigured) -> Self {
        FactureError::Billing(err)
    }
}

impl From<serde_json::Error> for FactureError {
    fn from(err: serde_json::Error) -> Self {
        FactureError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<anyhow::Error> for FactureError {
    fn from(err: anyhow::Error) -> Self {
        FactureError::Internal(err.to_string())
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for facture operations
pub type FactureResult<T> = Result<T, FactureError>;

// =============================================================================
// Tests
// =============================================================================

//! Validation gate
//!
//! This module provides a declarative approach to validating and
//! filtering entity payloads before they reach the handlers. Each
//! entity declares a rule table; the gate turns an untrusted payload
//! into either a normalized record or a field-indexed error report.

pub mod config;
pub mod extractor;
pub mod filters;
pub mod validators;

use indexmap::IndexMap;

pub use config::{EntityValidationConfig, FieldRule, ValidationMode};
pub use extractor::{Validated, ValidatableEntity};

/// Field-indexed validation report: field name to the ordered list of
/// violation messages for that field
pub type FieldErrors = IndexMap<String, Vec<String>>;

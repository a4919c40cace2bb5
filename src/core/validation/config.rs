//! Entity validation rule tables
//!
//! An [`EntityValidationConfig`] is a plain-data description of the
//! fields an entity accepts: presence, nullability, normalization
//! filters and an ordered constraint list per field. The same table
//! serves both operation modes:
//!
//! - [`ValidationMode::Create`]: strict, all required fields must be
//!   present
//! - [`ValidationMode::Update`]: partial, required fields are validated
//!   only when present in the payload
//!
//! The report is complete across fields (every failing field appears),
//! but evaluation stops at the first failing constraint within a field
//! so a single field never collects redundant messages.

use super::FieldErrors;
use serde_json::{Map, Value};

/// Operation mode for a validation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Strict: required fields must be present (entity creation)
    Create,
    /// Partial: required fields validated only if present (entity update)
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Required,
    Optional,
}

type BoxedValidator = Box<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;
type BoxedFilter = Box<dyn Fn(&str, Value) -> anyhow::Result<Value> + Send + Sync>;

/// Rules for a single payload field
pub struct FieldRule {
    name: &'static str,
    presence: Presence,
    nullable: bool,
    filters: Vec<BoxedFilter>,
    validators: Vec<BoxedValidator>,
}

impl FieldRule {
    /// A field that must be present when creating the entity
    pub fn required(name: &'static str) -> Self {
        Self {
            name,
            presence: Presence::Required,
            nullable: false,
            filters: Vec::new(),
            validators: Vec::new(),
        }
    }

    /// A field that may always be omitted
    pub fn optional(name: &'static str) -> Self {
        Self {
            name,
            presence: Presence::Optional,
            nullable: false,
            filters: Vec::new(),
            validators: Vec::new(),
        }
    }

    /// Declare that an explicit null (or empty string) is accepted as
    /// "no value supplied" and normalized to null
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Add a normalization filter, applied in declaration order before
    /// any validator runs
    pub fn filter(
        mut self,
        f: impl Fn(&str, Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.filters.push(Box::new(f));
        self
    }

    /// Add a constraint, checked in declaration order
    pub fn validator(
        mut self,
        v: impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validators.push(Box::new(v));
        self
    }

    /// Normalize and check a present value.
    ///
    /// Returns the filtered value on success, null for an explicitly
    /// absent nullable value, or the first failing constraint's message.
    fn check(&self, raw: &Value) -> Result<Value, String> {
        let mut value = raw.clone();
        for filter in &self.filters {
            value = filter(self.name, value).map_err(|e| e.to_string())?;
        }

        let explicitly_absent =
            value.is_null() || value.as_str().is_some_and(|s| s.is_empty());
        if explicitly_absent {
            if self.nullable {
                return Ok(Value::Null);
            }
            // Present but empty on a non-nullable field: same report as
            // a missing required field.
            return Err(format!("Le champ '{}' est requis", self.name));
        }

        for validator in &self.validators {
            validator(self.name, &value)?;
        }
        Ok(value)
    }
}

/// Ordered validation rule table for one entity type
pub struct EntityValidationConfig {
    entity_type: &'static str,
    fields: Vec<FieldRule>,
}

impl EntityValidationConfig {
    pub fn new(entity_type: &'static str) -> Self {
        Self {
            entity_type,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    /// Validate a raw payload and produce the normalized record.
    ///
    /// On success the record contains exactly the fields that were
    /// present and valid, filtered and coerced; unknown payload keys are
    /// dropped. On failure every failing field is reported.
    pub fn validate_and_filter(
        &self,
        mode: ValidationMode,
        payload: Value,
    ) -> Result<Value, FieldErrors> {
        let mut errors = FieldErrors::new();

        let Some(object) = payload.as_object() else {
            errors.insert(
                "_payload".to_string(),
                vec!["Le corps de la requête doit être un objet JSON".to_string()],
            );
            return Err(errors);
        };

        let mut output = Map::new();

        for rule in &self.fields {
            match object.get(rule.name) {
                None => {
                    if rule.presence == Presence::Required && mode == ValidationMode::Create {
                        errors
                            .entry(rule.name.to_string())
                            .or_default()
                            .push(format!("Le champ '{}' est requis", rule.name));
                    }
                }
                Some(raw) => match rule.check(raw) {
                    Ok(value) => {
                        output.insert(rule.name.to_string(), value);
                    }
                    Err(message) => {
                        errors
                            .entry(rule.name.to_string())
                            .or_default()
                            .push(message);
                    }
                },
            }
        }

        if errors.is_empty() {
            Ok(Value::Object(output))
        } else {
            tracing::debug!(
                entity = self.entity_type,
                fields = ?errors.keys().collect::<Vec<_>>(),
                "payload rejected by validation gate"
            );
            Err(errors)
        }
    }
}

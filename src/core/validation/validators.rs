//! Reusable field validators
//!
//! Each validator checks one constraint on one field value. Validators
//! assume presence and null handling were already decided by the rule
//! table; a validator only ever sees a non-null value.

use serde_json::Value;
use validator::ValidateEmail;

/// Validator: string no longer than `max` characters
pub fn string_max(max: usize) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        let Some(s) = value.as_str() else {
            return Err(format!(
                "Le champ '{}' doit être une chaîne de caractères",
                field
            ));
        };
        let len = s.chars().count();
        if len > max {
            Err(format!(
                "'{}' ne doit pas dépasser {} caractères (actuellement: {})",
                field, max, len
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: string of exactly `len` characters
pub fn exact_length(
    len: usize,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        let Some(s) = value.as_str() else {
            return Err(format!(
                "Le champ '{}' doit être une chaîne de caractères",
                field
            ));
        };
        let actual = s.chars().count();
        if actual != len {
            Err(format!(
                "'{}' doit comporter exactement {} caractères (actuellement: {})",
                field, len, actual
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: valid email shape
pub fn email() -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        let Some(s) = value.as_str() else {
            return Err(format!(
                "Le champ '{}' doit être une chaîne de caractères",
                field
            ));
        };
        if s.validate_email() {
            Ok(())
        } else {
            Err(format!(
                "'{}' doit être une adresse e-mail valide (valeur: {})",
                field, s
            ))
        }
    }
}

/// Validator: number at least `min`
pub fn min_value(min: f64) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        let Some(num) = value.as_f64() else {
            return Err(format!("'{}' doit être un nombre", field));
        };
        if num < min {
            Err(format!(
                "'{}' doit être au moins {} (valeur: {})",
                field, min, num
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: number no greater than `max`
pub fn max_value(max: f64) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        let Some(num) = value.as_f64() else {
            return Err(format!("'{}' doit être un nombre", field));
        };
        if num > max {
            Err(format!(
                "'{}' ne doit pas dépasser {} (valeur: {})",
                field, max, num
            ))
        } else {
            Ok(())
        }
    }
}

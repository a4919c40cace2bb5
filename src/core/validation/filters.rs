//! Reusable field filters
//!
//! These filters normalize payload values before validation

use anyhow::Result;
use serde_json::{Value, json};

/// Filter: trim whitespace from string
pub fn trim() -> impl Fn(&str, Value) -> Result<Value> + Send + Sync + Clone {
    |_: &str, value: Value| {
        if let Some(s) = value.as_str() {
            Ok(Value::String(s.trim().to_string()))
        } else {
            Ok(value)
        }
    }
}

/// Filter: coerce a numeric value to a float
///
/// Form payloads carry numbers as strings; "19.99" becomes 19.99 so the
/// numeric validators and the normalized record see an actual number.
/// Integer JSON numbers are normalized to floats too, so records carry
/// one numeric representation. Non-numeric strings pass through
/// untouched and fail type validation.
pub fn coerce_number() -> impl Fn(&str, Value) -> Result<Value> + Send + Sync + Clone {
    |_: &str, value: Value| {
        if let Some(s) = value.as_str() {
            // "NaN"/"inf" parse as non-finite floats, which serde_json
            // serializes as null; keep the string so the numeric
            // validators report the type mismatch instead.
            return match s.trim().parse::<f64>() {
                Ok(num) if num.is_finite() => Ok(json!(num)),
                _ => Ok(value),
            };
        }
        if let Some(num) = value.as_f64() {
            return Ok(json!(num));
        }
        Ok(value)
    }
}

/// Filter: round number to specified decimal places
///
/// Money fields are rounded to two places so the normalized record never
/// carries sub-cent precision.
pub fn round_decimals(
    decimals: u32,
) -> impl Fn(&str, Value) -> Result<Value> + Send + Sync + Clone {
    move |_: &str, value: Value| {
        if let Some(num) = value.as_f64() {
            let factor = 10_f64.powi(decimals as i32);
            let rounded = (num * factor).round() / factor;
            Ok(json!(rounded))
        } else {
            Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === trim() ===

    #[test]
    fn test_trim_removes_whitespace() {
        let f = trim();
        let result = f("name", json!("  Acme  ")).expect("should not fail");
        assert_eq!(result, json!("Acme"));
    }

    #[test]
    fn test_trim_no_whitespace_unchanged() {
        let f = trim();
        let result = f("name", json!("Acme")).expect("should not fail");
        assert_eq!(result, json!("Acme"));
    }

    #[test]
    fn test_trim_non_string_passthrough() {
        let f = trim();
        let result = f("price", json!(42)).expect("should not fail");
        assert_eq!(result, json!(42));
    }

    #[test]
    fn test_trim_whitespace_only_becomes_empty() {
        let f = trim();
        let result = f("name", json!("   ")).expect("should not fail");
        assert_eq!(result, json!(""));
    }

    #[test]
    fn test_trim_null_passthrough() {
        let f = trim();
        let result = f("name", json!(null)).expect("should not fail");
        assert_eq!(result, json!(null));
    }

    // === coerce_number() ===

    #[test]
    fn test_coerce_number_integer_string() {
        let f = coerce_number();
        let result = f("price", json!("42")).expect("should not fail");
        assert_eq!(result, json!(42.0));
    }

    #[test]
    fn test_coerce_number_decimal_string() {
        let f = coerce_number();
        let result = f("price", json!("19.99")).expect("should not fail");
        assert_eq!(result, json!(19.99));
    }

    #[test]
    fn test_coerce_number_negative_string() {
        let f = coerce_number();
        let result = f("price", json!("-5")).expect("should not fail");
        assert_eq!(result, json!(-5.0));
    }

    #[test]
    fn test_coerce_number_already_float_unchanged() {
        let f = coerce_number();
        let result = f("price", json!(7.5)).expect("should not fail");
        assert_eq!(result, json!(7.5));
    }

    #[test]
    fn test_coerce_number_integer_normalized_to_float() {
        let f = coerce_number();
        let result = f("price", json!(42)).expect("should not fail");
        assert_eq!(result, json!(42.0));
    }

    #[test]
    fn test_coerce_number_null_passthrough() {
        let f = coerce_number();
        let result = f("price", json!(null)).expect("should not fail");
        assert_eq!(result, json!(null));
    }

    #[test]
    fn test_coerce_number_non_numeric_string_passthrough() {
        let f = coerce_number();
        let result = f("price", json!("expensive")).expect("should not fail");
        assert_eq!(result, json!("expensive"));
    }

    #[test]
    fn test_coerce_number_empty_string_passthrough() {
        let f = coerce_number();
        let result = f("price", json!("")).expect("should not fail");
        assert_eq!(result, json!(""));
    }

    #[test]
    fn test_coerce_number_nan_string_passthrough() {
        let f = coerce_number();
        let result = f("price", json!("NaN")).expect("should not fail");
        assert_eq!(result, json!("NaN"));
    }

    #[test]
    fn test_coerce_number_infinity_string_passthrough() {
        let f = coerce_number();
        for s in ["inf", "-inf", "infinity"] {
            let result = f("price", json!(s)).expect("should not fail");
            assert_eq!(result, json!(s));
        }
    }

    // === round_decimals() ===

    #[test]
    fn test_round_decimals_two_places() {
        let f = round_decimals(2);
        let result = f("price", json!(3.14159)).expect("should not fail");
        assert_eq!(result, json!(3.14));
    }

    #[test]
    fn test_round_decimals_rounds_up() {
        let f = round_decimals(2);
        let result = f("price", json!(19.876)).expect("should not fail");
        assert_eq!(result, json!(19.88));
    }

    #[test]
    fn test_round_decimals_negative_number() {
        let f = round_decimals(1);
        let result = f("amount", json!(-3.456)).expect("should not fail");
        assert_eq!(result, json!(-3.5));
    }

    #[test]
    fn test_round_decimals_integer_unchanged() {
        let f = round_decimals(2);
        let result = f("price", json!(42.0)).expect("should not fail");
        assert_eq!(result, json!(42.0));
    }

    #[test]
    fn test_round_decimals_non_number_passthrough() {
        let f = round_decimals(2);
        let result = f("name", json!("Acme")).expect("should not fail");
        assert_eq!(result, json!("Acme"));
    }
}

//! Structural equality.
//!
//! Two scalar rules are supported:
//!
//! - **strict**: same kind and same payload.
//! - **loose**: `==`-style coercion between numbers, numeric strings and
//!   booleans; `null` only equals `null` or an absent value.
//!
//! Both rules treat a `NaN` number as equal to another `NaN` number so that
//! equality stays reflexive. A `NaN` produced by coercing a string or boolean
//! equals nothing.
//! Containers compare structurally under whichever rule was chosen: sequences
//! element by element, mappings by key set and per-key value.

use crate::model::{CompareOptions, Value};
use std::sync::Arc;

/// Compare two values structurally
pub fn deep_equal(a: &Value, b: &Value, strict: bool) -> bool {
    match (a, b) {
        (Value::Array(x), Value::Array(y)) => {
            Arc::ptr_eq(x, y)
                || (x.len() == y.len()
                    && x.iter().zip(y.iter()).all(|(l, r)| deep_equal(l, r, strict)))
        }
        (Value::Object(x), Value::Object(y)) => {
            Arc::ptr_eq(x, y)
                || (x.len() == y.len()
                    && x.iter().all(|(name, l)| {
                        y.get(name)
                            .map(|r| deep_equal(l, r, strict))
                            .unwrap_or(false)
                    }))
        }
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => {
            false
        }
        _ if strict => strict_scalar_eq(a, b),
        _ => loose_scalar_eq(a, b),
    }
}

/// Compare two possibly-absent values
///
/// Absent equals absent; loosely it also equals `Null`.
pub fn deep_equal_opt(a: Option<&Value>, b: Option<&Value>, strict: bool) -> bool {
    match (a, b) {
        (None, None) => true,
        (None, Some(Value::Null)) | (Some(Value::Null), None) => !strict,
        (None, Some(_)) | (Some(_), None) => false,
        (Some(a), Some(b)) => deep_equal(a, b, strict),
    }
}

/// Compare two values, optionally scoped to a list of top-level attributes
///
/// With `attr_names` set, attributes are checked in list order and the first
/// mismatch ends the comparison. Attributes of non-mapping values are absent.
pub fn are_equal(a: &Value, b: &Value, options: &CompareOptions) -> bool {
    if !options.is_restricted() {
        return deep_equal(a, b, options.strict);
    }

    options.attr_names.iter().all(|name| {
        let equal = deep_equal_opt(a.get(name), b.get(name), options.strict);
        if !equal {
            tracing::debug!(attr_name = %name, strict = options.strict, "attribute mismatch");
        }
        equal
    })
}

fn numbers_equal(x: f64, y: f64) -> bool {
    x == y || (x.is_nan() && y.is_nan())
}

fn strict_scalar_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(*x, *y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Date(x), Value::Date(y)) => x == y,
        (Value::Function(x), Value::Function(y)) => x.ptr_eq(y),
        _ => false,
    }
}

/// `==`-style equality between two non-container values
///
/// Dates only equal dates; they are never coerced to numbers or strings.
pub fn loose_scalar_eq(a: &Value, b: &Value) -> bool {
    if a.kind() == b.kind() {
        return strict_scalar_eq(a, b);
    }

    match (a, b) {
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Function(_), _) | (_, Value::Function(_)) => false,
        (Value::Bool(x), other) | (other, Value::Bool(x)) => {
            loose_scalar_eq(&Value::Number(f64::from(u8::from(*x))), other)
        }
        // coercion yields NaN for junk text, which must never match
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            *n == string_to_number(s)
        }
        _ => false,
    }
}

/// Numeric reading of a string; blank strings read as zero, junk as `NaN`
pub fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        return u64::from_str_radix(hex, 16)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }
    // Rust accepts "inf"/"nan" spellings that are not numbers here
    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_loose_number_string_coercion() {
        assert!(deep_equal(&Value::from(2), &Value::from("2"), false));
        assert!(deep_equal(&Value::from("2"), &Value::from(2), false));
        assert!(!deep_equal(&Value::from(2), &Value::from("2"), true));
        assert!(deep_equal(&Value::from(0), &Value::from(""), false));
        assert!(!deep_equal(&Value::from(1), &Value::from("one"), false));
    }

    #[test]
    fn test_loose_boolean_coercion() {
        assert!(deep_equal(&Value::from(true), &Value::from(1), false));
        assert!(deep_equal(&Value::from("1"), &Value::from(true), false));
        assert!(deep_equal(&Value::from(false), &Value::from("0"), false));
        assert!(!deep_equal(&Value::from(true), &Value::from(2), false));
    }

    #[test]
    fn test_null_only_equals_null() {
        assert!(deep_equal(&Value::Null, &Value::Null, true));
        assert!(!deep_equal(&Value::Null, &Value::from(0), false));
        assert!(!deep_equal(&Value::from(false), &Value::Null, false));
    }

    #[test]
    fn test_absent_versus_null() {
        assert!(deep_equal_opt(None, Some(&Value::Null), false));
        assert!(!deep_equal_opt(None, Some(&Value::Null), true));
        assert!(deep_equal_opt(None, None, true));
        assert!(!deep_equal_opt(Some(&Value::from(1)), None, false));
    }

    #[test]
    fn test_dates_only_equal_dates() {
        let when = Utc.with_ymd_and_hms(2020, 5, 17, 10, 0, 0).unwrap();
        let a = Value::from(when);
        let b = Value::from(when);
        assert!(deep_equal(&a, &b, true));
        assert!(deep_equal(&a, &b, false));
        assert!(!deep_equal(
            &a,
            &Value::from(when.timestamp_millis()),
            false
        ));
        assert!(!deep_equal(
            &a,
            &Value::from("2020-05-17T10:00:00.000Z"),
            false
        ));
    }

    #[test]
    fn test_containers_recurse_with_rule() {
        let a = Value::from(json!({"a": 1, "b": [1, "2"]}));
        let b = Value::from(json!({"b": ["1", 2], "a": "1"}));
        assert!(deep_equal(&a, &b, false));
        assert!(!deep_equal(&a, &b, true));
    }

    #[test]
    fn test_array_never_equals_mapping() {
        let a = Value::from(json!([]));
        let b = Value::from(json!({}));
        assert!(!deep_equal(&a, &b, false));
    }

    #[test]
    fn test_nan_is_reflexive() {
        let nan = Value::from(f64::NAN);
        assert!(deep_equal(&nan, &nan, true));
        assert!(deep_equal(&nan, &nan, false));
    }

    #[test]
    fn test_coerced_nan_never_matches() {
        let nan = Value::from(f64::NAN);
        for text in ["hello", "NaN", "12px", "inf"] {
            assert!(!deep_equal(&nan, &Value::from(text), false), "{text}");
            assert!(!deep_equal(&Value::from(text), &nan, false), "{text}");
        }
        assert!(!deep_equal(&Value::from(true), &Value::from("yes"), false));
    }

    #[test]
    fn test_string_to_number() {
        assert_eq!(string_to_number(" 42 "), 42.0);
        assert_eq!(string_to_number("0x1A"), 26.0);
        assert_eq!(string_to_number("1e3"), 1000.0);
        assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
        assert!(string_to_number("inf").is_nan());
        assert!(string_to_number("12px").is_nan());
    }

    #[test]
    fn test_are_equal_restricted_short_circuits_in_order() {
        let a = Value::from(json!({"a": 1, "b": "B"}));
        let b = Value::from(json!({"a": 2, "b": "B"}));

        let only_b = CompareOptions::default().with_attr_names(["b"]);
        let only_a = CompareOptions::default().with_attr_names(["a"]);

        assert!(are_equal(&a, &b, &only_b));
        assert!(!are_equal(&a, &b, &only_a));
        assert!(!are_equal(&a, &b, &CompareOptions::default()));
    }
}

//! Primitive field validators
//!
//! Each validator reads one key from the request body and either returns the
//! typed value or a [`ValidationError`] naming the key and the violated bound.
//! The reason strings are shown to clients verbatim.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;
use serde_json::Value;

use super::types::{FieldMap, ValidationError, ValidationResult};

static TIME_OF_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]$").expect("time-of-day pattern compiles")
});

/// Length bounds for a string field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrRule {
    pub min_len: usize,
    pub max_len: Option<usize>,
    /// Overrides both bounds when set
    pub exact_len: Option<usize>,
}

impl StrRule {
    /// Non-empty with an upper bound
    pub const fn max(max_len: usize) -> Self {
        Self {
            min_len: 1,
            max_len: Some(max_len),
            exact_len: None,
        }
    }

    pub const fn exact(len: usize) -> Self {
        Self {
            min_len: 1,
            max_len: None,
            exact_len: Some(len),
        }
    }
}

impl Default for StrRule {
    fn default() -> Self {
        Self {
            min_len: 1,
            max_len: None,
            exact_len: None,
        }
    }
}

/// Inclusive bounds for an integer field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntRule {
    pub min_val: Option<i64>,
    pub max_val: Option<i64>,
}

impl IntRule {
    pub const fn at_least(min_val: i64) -> Self {
        Self {
            min_val: Some(min_val),
            max_val: None,
        }
    }

    pub const fn with_max(mut self, max_val: i64) -> Self {
        self.max_val = Some(max_val);
        self
    }
}

/// True when the key exists and is not JSON `null`
pub fn is_present(data: &FieldMap, key: &str) -> bool {
    data.get(key).is_some_and(|v| !v.is_null())
}

/// True when the key holds a truthy value: not `null`, `false`, zero, or an
/// empty string, array or object
pub fn is_truthy(data: &FieldMap, key: &str) -> bool {
    match data.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
    }
}

pub fn require_str(data: &FieldMap, key: &str, rule: StrRule) -> ValidationResult<String> {
    let value = match data.get(key) {
        Some(Value::String(s)) => s,
        _ => {
            return Err(ValidationError::new(
                key,
                format!("Missing or invalid '{}': must be a string", key),
            ))
        }
    };

    let len = value.chars().count();

    if let Some(exact) = rule.exact_len {
        if len != exact {
            return Err(ValidationError::new(
                key,
                format!("'{}' must be exactly {} characters", key, exact),
            ));
        }
        return Ok(value.clone());
    }

    let too_long = rule.max_len.is_some_and(|max| len > max);
    if len < rule.min_len || too_long {
        let range = match rule.max_len {
            Some(max) => format!("{}-{}", rule.min_len, max),
            None => format!("≥{}", rule.min_len),
        };
        return Err(ValidationError::new(
            key,
            format!("'{}' length must be {}", key, range),
        ));
    }

    Ok(value.clone())
}

/// Validates the field only when it is present
pub fn optional_str(data: &FieldMap, key: &str, rule: StrRule) -> ValidationResult<Option<String>> {
    if is_present(data, key) {
        require_str(data, key, rule).map(Some)
    } else {
        Ok(None)
    }
}

pub fn require_int(data: &FieldMap, key: &str, rule: IntRule) -> ValidationResult<i64> {
    let value = data
        .get(key)
        .ok_or_else(|| ValidationError::new(key, format!("Missing '{}'", key)))?;

    let parsed = lossless_integer(value)
        .ok_or_else(|| ValidationError::new(key, format!("'{}' must be an integer", key)))?;

    if let Some(min) = rule.min_val {
        if parsed < min {
            return Err(ValidationError::new(key, format!("'{}' must be ≥ {}", key, min)));
        }
    }
    if let Some(max) = rule.max_val {
        if parsed > max {
            return Err(ValidationError::new(key, format!("'{}' must be ≤ {}", key, max)));
        }
    }

    Ok(parsed)
}

fn lossless_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            let f = n.as_f64()?;
            let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
            (f.fract() == 0.0 && in_range).then_some(f as i64)
        }
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

pub fn require_bool(data: &FieldMap, key: &str) -> ValidationResult<bool> {
    let value = data
        .get(key)
        .ok_or_else(|| ValidationError::new(key, format!("Missing '{}'", key)))?;

    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(invalid_bool(key)),
        },
        _ => Err(invalid_bool(key)),
    }
}

fn invalid_bool(key: &str) -> ValidationError {
    ValidationError::new(key, format!("'{}' must be boolean ('true'/'false')", key))
}

pub fn optional_bool(data: &FieldMap, key: &str) -> ValidationResult<Option<bool>> {
    if is_present(data, key) {
        require_bool(data, key).map(Some)
    } else {
        Ok(None)
    }
}

pub fn require_time(data: &FieldMap, key: &str) -> ValidationResult<NaiveTime> {
    let raw = match data.get(key) {
        Some(Value::String(s)) => s,
        _ => {
            return Err(ValidationError::new(
                key,
                format!("Missing or invalid '{}'", key),
            ))
        }
    };

    let malformed = || ValidationError::new(key, format!("'{}' must be in HH:MM:SS format", key));

    if !TIME_OF_DAY.is_match(raw) {
        return Err(malformed());
    }
    NaiveTime::parse_from_str(raw, "%H:%M:%S").map_err(|_| malformed())
}

/// Identifier captured from the URL path, already percent-decoded. A blank
/// identifier counts as missing; anything else is forwarded as given.
pub fn require_path_param(value: Option<&str>, name: &str) -> ValidationResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(ValidationError::new(
            name,
            format!("Missing URL parameter '{}'", name),
        )),
    }
}

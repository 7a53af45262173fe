//! Registration request entity
//!
//! The raw, untrusted record handed to the pipeline. Nothing here is
//! guaranteed: strings may be empty and the age may not even be a number.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The age exactly as it arrived on the wire
///
/// Callers can send anything for `age`, so it is kept as a JSON value and
/// interpreted loosely by the validators instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAge(pub Value);

impl RawAge {
    /// Whether the value counts as "filled in".
    ///
    /// Zero, empty strings, `false` and `null` are all treated as missing.
    pub fn is_truthy(&self) -> bool {
        is_truthy(&self.0)
    }

    /// Numeric reading of the value, coercing strings, booleans and null.
    ///
    /// Returns `None` when there is no sensible number to compare against.
    pub fn as_number(&self) -> Option<f64> {
        match &self.0 {
            Value::Null => Some(0.0),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Number(n) => n.as_f64(),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
                }
            }
            Value::Array(_) => {
                let text = loose_text(&self.0);
                RawAge(Value::String(text)).as_number()
            }
            Value::Object(_) => None,
        }
    }

    /// The underlying JSON number, if one was sent.
    pub fn as_json_number(&self) -> Option<&serde_json::Number> {
        match &self.0 {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl From<i32> for RawAge {
    fn from(age: i32) -> Self {
        Self(Value::from(age))
    }
}

impl From<f64> for RawAge {
    fn from(age: f64) -> Self {
        Self(Value::from(age))
    }
}

impl From<&str> for RawAge {
    fn from(age: &str) -> Self {
        Self(Value::from(age))
    }
}

impl From<Value> for RawAge {
    fn from(age: Value) -> Self {
        Self(age)
    }
}

impl std::fmt::Display for RawAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&loose_text(&self.0))
    }
}

/// Whether a loosely typed value counts as present
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a loosely typed value the way it reads when echoed back
///
/// Whole numbers print without a fraction, arrays join their items with
/// commas and `null` inside an array is blank.
pub fn loose_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => loose_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Text for a field that should be a string, with falsy values read as empty
pub fn loose_field(value: &Value) -> String {
    if is_truthy(value) {
        loose_text(value)
    } else {
        String::new()
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f.abs() < 1e21 {
                return format!("{:.0}", f);
            }
        }
    }
    n.to_string()
}

/// A registration as submitted, before any validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub age: RawAge,
    pub sex_code: String,
    pub country_name: String,
}

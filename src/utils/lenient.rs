//! Tolerant serde helpers for loosely typed API fields.
//!
//! The upstream API is not consistent about scalar types: coordinates and
//! ratings arrive as numbers or strings, category lists as arrays or
//! comma-separated strings, flags as booleans, numbers or strings. These
//! helpers accept every shape seen in practice and never fail on a type
//! mismatch; they fall back to "absent" instead.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::numbers::number_from_value;

/// Deserializes a number from a number or a numeric-looking string.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

/// Deserializes a non-negative counter, defaulting to zero.
pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .map(|n| n.max(0.0).floor() as u64)
        .unwrap_or(0))
}

/// Deserializes an integer id from a number or a string of digits.
///
/// Fractional numbers and non-numeric strings count as absent.
pub fn id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Deserializes a string from a string or any other scalar.
///
/// Blank strings become `None`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_string))
}

/// Deserializes a list of strings from an array or a comma-separated string.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    let list = match value {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };
    Ok(list)
}

/// Deserializes a truthy flag.
///
/// `true`, non-zero numbers and non-empty strings other than `"false"`, `"0"`
/// and `"no"` count as set.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => {
            let s = s.trim().to_ascii_lowercase();
            !(s.is_empty() || s == "false" || s == "0" || s == "no")
        }
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        Some(Value::Null) | None => false,
    })
}

/// Renders a JSON scalar as text; blank strings, null and containers yield `None`.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

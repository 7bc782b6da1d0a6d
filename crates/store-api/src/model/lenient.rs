//! Field deserializers that never fail on a wrong JSON type.
//!
//! A candidate payload may carry any JSON value in any field. Rather than rejecting the
//! whole body, a value of the wrong type is read as an absent field so that validation
//! can report it alongside every other violation.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keeps JSON strings, treats anything else as absent.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

/// Keeps JSON numbers, treats anything else as absent.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

//! Field decoders that never reject a payload over one odd value.
//!
//! Bootstrap responses are stored as snapshots; a null or wrong-typed field
//! decodes to its default instead of failing the whole body.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// JSON truthiness: `false`, `0`, `""`, null and absence are false.
pub fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Strings pass through, numbers and booleans are rendered, anything else is
/// `None`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Like [`text`] but defaults to an empty string.
pub fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    text(deserializer).map(Option::unwrap_or_default)
}

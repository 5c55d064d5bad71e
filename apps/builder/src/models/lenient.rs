//! Forgiving field decoders for hand-edited YAML.
//!
//! Rules:
//! - a scalar where text is expected is stringified (`2015` → `"2015"`)
//! - null or a nested value where text is expected becomes `""`
//! - a group with the wrong shape falls back to its `Default`, siblings unaffected
//! - a list field holding a non-list is empty; a malformed element is defaulted

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// Renders a scalar YAML value as display text.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => String::new(),
    }
}

/// Decodes `value` into `T`, or `T::default()` if the shape does not fit.
pub fn decode<T: DeserializeOwned + Default>(value: &Value) -> T {
    serde_yaml::from_value(value.clone()).unwrap_or_default()
}

pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value))
}

pub fn texts<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Sequence(items) => items.iter().map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Sequence(items) => items.iter().map(decode).collect(),
        _ => Vec::new(),
    })
}

pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decode(&value))
}

/// Keeps mapping entries whose key is a scalar, keyed by the key's text.
pub fn string_keyed<'de, D>(deserializer: D) -> Result<BTreeMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Mapping(map) = value else {
        return Ok(BTreeMap::new());
    };
    Ok(map
        .into_iter()
        .filter(|(k, _)| !matches!(k, Value::Null | Value::Sequence(_) | Value::Mapping(_)))
        .map(|(k, v)| (scalar_text(&k), v))
        .collect())
}

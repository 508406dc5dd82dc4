//! Lenient `deserialize_with` helpers for scanner output.
//!
//! component-detection writes loosely typed JSON: fields can be `null`,
//! missing, or occasionally of an unexpected type. A single odd record must
//! not make the whole result file unreadable, so these helpers map anything
//! unexpected to "absent" instead of failing.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Keeps string values, treats every other JSON type as absent.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Like [`string`] but yields an empty string for absent values.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string(deserializer)?.unwrap_or_default())
}

/// `true` only for a JSON boolean `true`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// Treats `null` as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Qualifier maps: objects only; string values kept verbatim, other scalars
/// rendered as JSON text, nulls dropped.
pub fn qualifiers<'de, D>(deserializer: D) -> Result<Option<BTreeMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(map) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    let qualifiers = map
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key, s)),
            other => Some((key, other.to_string())),
        })
        .collect();

    Ok(Some(qualifiers))
}

/// Array whose elements are deserialized one by one.
///
/// Elements that are not a valid `T` are dropped and counted in `skipped`;
/// `null` is an empty list and any other non-array value counts as one
/// skipped entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<T> {
    pub items: Vec<T>,
    pub skipped: usize,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            skipped: 0,
        }
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items, skipped: 0 }
    }
}

impl<'de, T> Deserialize<'de> for List<T>
where
    T: serde::de::DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => Self::default(),
            Value::Array(values) => {
                let total = values.len();
                let items: Vec<T> = values
                    .into_iter()
                    .filter_map(|value| serde_json::from_value(value).ok())
                    .collect();
                Self {
                    skipped: total - items.len(),
                    items,
                }
            }
            _ => Self {
                items: Vec::new(),
                skipped: 1,
            },
        })
    }
}

/// Deserializes `T` from an object, treating non-objects and malformed
/// objects as absent.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

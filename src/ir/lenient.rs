//! Field-level tolerant deserializers for node configuration.
//!
//! The upstream producer is allowed to emit partial or sloppy config. A field
//! of the wrong type decodes as its `Default` instead of failing the node, and
//! a sequence keeps only the entries that decode.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a field, falling back to `T::default()` when the value has the
/// wrong shape.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Decode a sequence field entry by entry. Non-sequences become empty and
/// entries that fail to decode are skipped.
pub fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Decode a whole config object. Anything that is not an object yields the
/// all-defaults payload.
pub fn decode_config<T>(config: Option<&Value>) -> T
where
    T: DeserializeOwned + Default,
{
    match config {
        Some(value @ Value::Object(_)) => T::deserialize(value.clone()).unwrap_or_default(),
        _ => T::default(),
    }
}

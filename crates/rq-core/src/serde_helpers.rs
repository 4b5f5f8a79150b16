//! Shared serde helper functions for query file fields.

use serde::de::value::StringDeserializer;
use serde::{Deserialize, Deserializer};

/// Deserialize an optional name, treating `null` and `""` as absent.
///
/// Used with `#[serde(default, deserialize_with = "...")]` on `as` and
/// `table` fields, where an empty string means "not given".
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => {
            T::deserialize(StringDeserializer::<D::Error>::new(raw)).map(Some)
        }
        _ => Ok(None),
    }
}

/// Deserialize a value that may be `null`, falling back to its default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "serde_helpers_test.rs"]
mod tests;

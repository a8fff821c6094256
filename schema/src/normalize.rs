//! Id aliasing for backend records.
//!
//! The backend sometimes answers with an explicit `id` and sometimes with the
//! database-native `_id` (a string, a number, or an extended-JSON
//! `{"$oid": "..."}` object). Everything downstream expects exactly one
//! string-ish `id` field, so records pass through [`normalize`] before serde
//! sees them.

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::ApiError;

/// Field name the database uses for its native identifier.
pub const NATIVE_ID_FIELD: &str = "_id";

/// Error returned by [`normalize`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// The record had neither `id` nor a usable `_id`.
    #[error("record is missing both `id` and `_id`")]
    MissingId,
    /// The record was not a JSON object.
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Ensure `value` carries a canonical `id`.
///
/// An explicit, non-null `id` wins and the record is returned untouched.
/// Otherwise `_id` is removed and re-inserted as a string `id`.
///
/// # Errors
///
/// Returns [`NormalizeError::MissingId`] when neither field is usable and
/// [`NormalizeError::NotAnObject`] for non-object input.
pub fn normalize(mut value: Value) -> Result<Value, NormalizeError> {
    let Value::Object(map) = &mut value else {
        return Err(NormalizeError::NotAnObject(json_kind(&value)));
    };
    if map.get("id").is_some_and(|id| !id.is_null()) {
        return Ok(value);
    }
    let native = map.remove(NATIVE_ID_FIELD).ok_or(NormalizeError::MissingId)?;
    let id = native_id_string(&native).ok_or(NormalizeError::MissingId)?;
    map.insert("id".to_owned(), Value::String(id));
    Ok(value)
}

/// Normalize and deserialize a single record.
///
/// # Errors
///
/// Propagates normalization failures and reports serde mismatches as
/// [`ApiError::Decode`].
pub fn decode_record<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    let value = normalize(value)?;
    Ok(serde_json::from_value(value)?)
}

/// Like [`decode_record`] for records whose id is optional: a record carrying
/// neither `id` nor `_id` decodes as-is instead of failing.
///
/// # Errors
///
/// Fails when `_id` is present but unusable, and reports serde mismatches as
/// [`ApiError::Decode`].
pub fn decode_record_opt_id<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    let has_id = value.as_object().is_some_and(|map| {
        map.get("id").is_some_and(|id| !id.is_null()) || map.contains_key(NATIVE_ID_FIELD)
    });
    let value = if has_id { normalize(value)? } else { value };
    Ok(serde_json::from_value(value)?)
}

/// Normalize and deserialize every element of a JSON array.
///
/// # Errors
///
/// Fails on the first record that cannot be normalized or decoded, and when
/// `value` is not an array.
pub fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ApiError> {
    let Value::Array(items) = value else {
        return Err(ApiError::Decode(format!("expected a JSON array, got {}", json_kind(&value))));
    };
    items.into_iter().map(decode_record).collect()
}

fn native_id_string(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(obj) => obj.get("$oid").and_then(Value::as_str).map(str::to_owned),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Accept either a JSON string or number for an identifier field.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {}", json_kind(&other)))),
    }
}

/// Like [`deserialize_id`] but tolerates `null`.
pub(crate) fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!("expected string or number id, got {}", json_kind(&other)))),
    }
}

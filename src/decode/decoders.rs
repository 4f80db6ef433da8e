//! Decoder implementations

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Root marker used by `serde_path_to_error` for an empty path
const ROOT: &str = ".";

/// Decode a JSON value, reporting the failing field path
pub fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(|e| {
        let path = e.path().to_string();
        Error::decode(path, e.into_inner().to_string())
    })
}

/// Decode the field `field` of a JSON object
pub fn decode_field<T: DeserializeOwned>(mut value: Value, field: &str) -> Result<T> {
    let inner = match value.get_mut(field) {
        Some(v) => v.take(),
        None => return Err(Error::decode(field, "missing field")),
    };
    decode_value(inner).map_err(|e| with_path_prefix(e, field))
}

/// Decode every element of the array field `field` of a JSON object
pub fn decode_list_field<T: DeserializeOwned>(mut value: Value, field: &str) -> Result<Vec<T>> {
    let items = match value.get_mut(field).map(Value::take) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(Error::decode(
                field,
                format!("expected an array, found {}", kind_of(&other)),
            ))
        }
        None => return Err(Error::decode(field, "missing field")),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| decode_value(item).map_err(|e| with_path_prefix(e, &format!("{field}[{i}]"))))
        .collect()
}

/// Join a parent path and a child path reported by a nested decoder
pub fn join_path(prefix: &str, path: &str) -> String {
    if path.is_empty() || path == ROOT {
        prefix.to_string()
    } else if path.starts_with('[') {
        format!("{prefix}{path}")
    } else {
        format!("{prefix}.{path}")
    }
}

/// Re-root a decode error under `prefix`; other errors pass through
pub fn with_path_prefix(err: Error, prefix: &str) -> Error {
    match err {
        Error::Decode { path, message } => Error::Decode {
            path: join_path(prefix, &path),
            message,
        },
        other => other,
    }
}

/// Deserialize an optional `YYYY-MM-DD` date; null and `""` both mean absent
pub fn optional_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! JSON bridge for collections.
//!
//! Decoding goes through `serde_json` and then into [`Value`]s:
//!
//! - arrays become sequential collections keyed `0..n`
//! - objects become collections in document order; property names that are
//!   canonical decimal integers become integer keys
//! - integers that fit `i64` become [`Value::Int`], other numbers
//!   [`Value::Float`]
//! - property names starting with NUL are rejected with
//!   [`JsonError::InvalidPropertyName`], the same rule encoding applies.
//!   Decoders that produce plain associative arrays usually accept such
//!   names; this one does not.
//!
//! A document consisting of the literal `null` decodes successfully to
//! `None`, which is distinct from a decode failure.
//!
//! Encoding is the reverse: a collection keyed exactly `0..n` in order
//! becomes a JSON array, anything else a JSON object.

use tracing::{debug, warn};

use crate::Result;
use crate::collection::{Collection, Key, Value};
use crate::constants::DEFAULT_JSON_DEPTH;

pub mod errors;

pub use errors::JsonError;

/// Limits applied when decoding or encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonOptions {
    /// Maximum nesting of arrays and objects.
    ///
    /// The parser has its own hard limit of 128 levels, so larger values
    /// only affect encoding.
    pub max_depth: usize,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_JSON_DEPTH,
        }
    }
}

/// Decodes `text` with default options.
///
/// ```
/// # use keyed_collection::json;
/// assert!(json::decode("null").unwrap().is_none());
/// assert!(json::decode("[1, 2]").unwrap().is_some());
/// assert!(json::decode("{invalid").is_err());
/// ```
pub fn decode(text: &str) -> Result<Option<Value>> {
    decode_with(text, &JsonOptions::default())
}

/// Decodes `text`, returning `None` for the literal `null`.
pub fn decode_with(text: &str, options: &JsonOptions) -> Result<Option<Value>> {
    let parsed: serde_json::Value = serde_json::from_str(text).map_err(|e| {
        let err = JsonError::from_decode(&e);
        debug!(error = %err, "JSON decode failed");
        err
    })?;

    match parsed {
        serde_json::Value::Null => Ok(None),
        other => Ok(Some(from_json_value(other, 0, options)?)),
    }
}

/// Decodes raw bytes, rejecting input that is not valid UTF-8.
pub fn decode_bytes(bytes: &[u8]) -> Result<Option<Value>> {
    let text = std::str::from_utf8(bytes).map_err(|e| JsonError::MalformedUtf8 {
        detail: e.to_string(),
    })?;
    decode(text)
}

fn from_json_value(
    json: serde_json::Value,
    depth: usize,
    options: &JsonOptions,
) -> std::result::Result<Value, JsonError> {
    use serde_json::Value as Json;

    let value = match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => match n.as_f64() {
                Some(f) => Value::Float(f),
                None => {
                    return Err(JsonError::InfOrNan {
                        detail: n.to_string(),
                    });
                }
            },
        },
        Json::String(s) => Value::Text(s),
        Json::Array(items) => {
            check_depth(depth + 1, options)?;
            let mut collection = Collection::new();
            for item in items {
                collection.add(from_json_value(item, depth + 1, options)?);
            }
            Value::Collection(collection)
        }
        Json::Object(map) => {
            check_depth(depth + 1, options)?;
            let mut collection = Collection::new();
            for (name, item) in map {
                if name.starts_with('\0') {
                    return Err(JsonError::InvalidPropertyName { name });
                }
                let key = Key::from_property_name(&name);
                collection.set(key, from_json_value(item, depth + 1, options)?);
            }
            Value::Collection(collection)
        }
    };
    Ok(value)
}

fn check_depth(depth: usize, options: &JsonOptions) -> std::result::Result<(), JsonError> {
    if depth > options.max_depth {
        return Err(JsonError::DepthExceeded {
            detail: format!("depth {depth} exceeds limit {}", options.max_depth),
        });
    }
    Ok(())
}

/// Encodes `value` with default options.
pub fn encode(value: &Value) -> Result<String> {
    encode_with(value, &JsonOptions::default())
}

/// Encodes `value` as compact JSON.
///
/// Fails on non-finite floats, on property names starting with NUL, and on
/// nesting deeper than `options.max_depth`.
pub fn encode_with(value: &Value, options: &JsonOptions) -> Result<String> {
    validate_encodable(value, 0, options)?;
    Ok(serde_json::to_string(value)?)
}

fn validate_encodable(
    value: &Value,
    depth: usize,
    options: &JsonOptions,
) -> std::result::Result<(), JsonError> {
    match value {
        Value::Float(f) if !f.is_finite() => Err(JsonError::InfOrNan {
            detail: f.to_string(),
        }),
        _ => match value.entries() {
            Some(entries) => validate_entries(entries, depth + 1, options),
            None => Ok(()),
        },
    }
}

fn validate_entries<'a>(
    entries: impl Iterator<Item = (&'a Key, &'a Value)>,
    depth: usize,
    options: &JsonOptions,
) -> std::result::Result<(), JsonError> {
    check_depth(depth, options)?;
    for (key, child) in entries {
        if let Key::Str(name) = key
            && name.starts_with('\0')
        {
            return Err(JsonError::InvalidPropertyName { name: name.clone() });
        }
        validate_encodable(child, depth, options)?;
    }
    Ok(())
}

impl Collection {
    /// Creates a collection from a JSON document.
    ///
    /// Documents that do not decode to an array or object (including `null`
    /// and scalars) yield an empty collection.
    pub fn from_json(text: &str) -> Result<Collection> {
        let mut collection = Collection::new();
        collection.reconstruct_from_json(text, true)?;
        Ok(collection)
    }

    /// Replaces this collection's contents from a JSON document.
    ///
    /// With `as_list`, the document is decoded; an array or object replaces
    /// all entries, anything else clears the collection. A decode failure
    /// leaves the collection untouched.
    ///
    /// Without `as_list` nothing happens: there is no defined alternative
    /// reading of the document.
    pub fn reconstruct_from_json(&mut self, text: &str, as_list: bool) -> Result<&mut Self> {
        if !as_list {
            warn!("reconstruct_from_json called without as_list; contents left unchanged");
            return Ok(self);
        }

        match decode(text)? {
            Some(Value::Collection(decoded)) => {
                self.clear();
                self.extend(decoded);
            }
            _ => {
                self.clear();
            }
        }
        Ok(self)
    }

    /// Encodes this collection as JSON.
    pub fn to_json(&self) -> Result<String> {
        validate_entries(self.iter(), 1, &JsonOptions::default())?;
        Ok(serde_json::to_string(self)?)
    }
}

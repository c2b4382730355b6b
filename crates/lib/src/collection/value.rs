//! Values stored in a [`Collection`].
//!
//! A [`Value`] is either a leaf (null, boolean, number, text) or a composite
//! (a nested [`Collection`] or a custom keyed object implementing
//! [`Composite`]). The split matters to the deep-transform engine: leaves are
//! handed to the caller's transform, composites are walked recursively.

use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeMap, ser::SerializeSeq};

use super::{Collection, Key};
use crate::transform::{Composite, KeyedAccess};

/// A value held by a collection entry.
///
/// Equality is strict: two values are equal only when they share a variant
/// and a payload, so `Value::Int(1) != Value::Float(1.0)`. Custom objects
/// compare equal when their type names and ordered entries match.
///
/// ```
/// # use keyed_collection::Value;
/// assert!(Value::from(42) == 42);
/// assert!(Value::from("hello") == "hello");
/// assert_ne!(Value::Int(1), Value::Float(1.0));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    // Leaf values
    /// Null/empty value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),

    // Composite values
    /// Nested generic collection
    Collection(Collection),
    /// Custom keyed object
    Object(Box<dyn Composite>),
}

impl Value {
    /// Returns true if this value has no keyed children
    pub fn is_leaf(&self) -> bool {
        !self.is_composite()
    }

    /// Returns true if this value contains keyed children
    pub fn is_composite(&self) -> bool {
        matches!(self, Value::Collection(_) | Value::Object(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Collection(_) => "collection",
            Value::Object(object) => object.type_name(),
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a collection (returns immutable reference)
    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Value::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable collection reference
    pub fn as_collection_mut(&mut self) -> Option<&mut Collection> {
        match self {
            Value::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    /// Attempts to convert to a custom object
    pub fn as_object(&self) -> Option<&dyn Composite> {
        match self {
            Value::Object(object) => Some(&**object),
            _ => None,
        }
    }

    /// Keyed write access, available for collections and for custom objects
    /// that support it.
    pub fn as_keyed_mut(&mut self) -> Option<&mut dyn KeyedAccess> {
        match self {
            Value::Collection(collection) => Some(collection),
            Value::Object(object) => object.keyed_access(),
            _ => None,
        }
    }

    /// Ordered entries of a composite value, or `None` for a leaf.
    pub fn entries(&self) -> Option<Box<dyn Iterator<Item = (&Key, &Value)> + '_>> {
        match self {
            Value::Collection(collection) => Some(Box::new(collection.iter())),
            Value::Object(object) => Some(object.entries()),
            _ => None,
        }
    }
}

/// Serializes ordered entries as a JSON array when the keys are exactly
/// `0..n` in order, and as a map otherwise.
pub(crate) fn serialize_entries<'a, S, I>(entries: I, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    I: Iterator<Item = (&'a Key, &'a Value)> + Clone,
{
    let is_list = entries
        .clone()
        .enumerate()
        .all(|(index, (key, _))| key.as_int() == Some(index as i64));

    if is_list {
        let mut seq = serializer.serialize_seq(None)?;
        for (_, value) in entries {
            seq.serialize_element(value)?;
        }
        seq.end()
    } else {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Collection(collection) => collection.serialize(serializer),
            Value::Object(object) => {
                let entries: Vec<_> = object.entries().collect();
                serialize_entries(entries.into_iter(), serializer)
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Collection(a), Value::Collection(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => {
                a.type_name() == b.type_name() && a.entries().eq(b.entries())
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Collection(collection) => write!(f, "{collection}"),
            Value::Object(object) => {
                write!(f, "{}{{", object.type_name())?;
                for (i, (key, value)) in object.entries().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Collection> for Value {
    fn from(value: Collection) -> Self {
        Value::Collection(value)
    }
}

impl From<Box<dyn Composite>> for Value {
    fn from(value: Box<dyn Composite>) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Builds a sequential collection keyed `0..n`.
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Collection(Collection::from_values(values))
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Value::Int(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        match self {
            Value::Int(n) => *n == *other as i64,
            _ => false,
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        match self {
            Value::Bool(b) => b == other,
            _ => false,
        }
    }
}

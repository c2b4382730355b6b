//! Keys identifying entries within a [`Collection`](super::Collection).

use std::fmt;

use serde::{Serialize, Serializer};

/// Identifier of a single entry in a collection.
///
/// Keys are either integers or strings, and both kinds may live side by side
/// in one collection. `Key::Int(0)` and `Key::Str("0".into())` are distinct
/// keys; no implicit conversion happens between the two kinds.
///
/// ```
/// # use keyed_collection::Key;
/// assert!(Key::from(3).is_int());
/// assert!(Key::from("name").is_str());
/// assert_ne!(Key::from(0), Key::from("0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key
    Int(i64),
    /// String key
    Str(String),
}

impl Key {
    /// Returns true if this is an integer key
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Returns true if this is a string key
    pub fn is_str(&self) -> bool {
        matches!(self, Key::Str(_))
    }

    /// Attempts to read the key as an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Str(_) => None,
        }
    }

    /// Attempts to read the key as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            Key::Int(_) => None,
        }
    }

    /// Builds a key from an object property name, turning canonical decimal
    /// integers (`"7"`, `"-2"`, but not `"07"` or `"+7"`) into integer keys.
    pub fn from_property_name(name: &str) -> Self {
        match name.parse::<i64>() {
            Ok(n) if n.to_string() == name => Key::Int(n),
            _ => Key::Str(name.to_string()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Str(s) => write!(f, "{s}"),
        }
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // JSON object keys are always strings
        serializer.collect_str(self)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(value as i64)
    }
}

/// Saturates at `i64::MAX`.
impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_string())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

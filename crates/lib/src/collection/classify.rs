//! Key-shape classification.
//!
//! A set of keys is [`KeyShape::Sequential`] when every key is an integer,
//! [`KeyShape::Associative`] when at least one is not, and
//! [`KeyShape::Empty`] when there are no keys at all. Contiguity plays no
//! part: `{0, 5, 10}` is sequential.

use super::{Collection, CollectionError, Key, Value};
use crate::Result;

/// Shape of a key set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyShape {
    /// No keys
    Empty,
    /// Every key is an integer
    Sequential,
    /// At least one key is a string
    Associative,
}

impl KeyShape {
    /// Classifies an arbitrary sequence of keys.
    ///
    /// ```
    /// # use keyed_collection::{Key, KeyShape};
    /// assert_eq!(KeyShape::of(&[]), KeyShape::Empty);
    /// assert_eq!(KeyShape::of(&[Key::Int(0), Key::Int(5)]), KeyShape::Sequential);
    /// assert_eq!(KeyShape::of(&[Key::Int(0), Key::from("x")]), KeyShape::Associative);
    /// ```
    pub fn of<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'a Key>,
    {
        let mut shape = KeyShape::Empty;
        for key in keys {
            if !key.is_int() {
                return KeyShape::Associative;
            }
            shape = KeyShape::Sequential;
        }
        shape
    }

    /// Returns true for [`KeyShape::Sequential`]
    pub fn is_sequential(&self) -> bool {
        matches!(self, KeyShape::Sequential)
    }

    /// Returns true for [`KeyShape::Associative`]
    pub fn is_associative(&self) -> bool {
        matches!(self, KeyShape::Associative)
    }

    /// Returns true for [`KeyShape::Empty`]
    pub fn is_empty(&self) -> bool {
        matches!(self, KeyShape::Empty)
    }
}

/// Entries of an array-like value, or `NotIterable` for a leaf.
pub(crate) fn array_like(value: &Value) -> Result<Box<dyn Iterator<Item = (&Key, &Value)> + '_>> {
    value.entries().ok_or_else(|| {
        CollectionError::NotIterable {
            type_name: value.type_name().to_string(),
        }
        .into()
    })
}

impl Collection {
    /// Shape of this collection's keys.
    pub fn key_shape(&self) -> KeyShape {
        KeyShape::of(self.keys())
    }

    /// Returns true if every key is an integer. False when empty.
    pub fn sequential(&self) -> bool {
        self.key_shape().is_sequential()
    }

    /// Returns true if at least one key is a string. False when empty.
    pub fn associative(&self) -> bool {
        self.key_shape().is_associative()
    }

    /// Shape of the keys of any array-like value.
    ///
    /// Fails with an invalid-argument error when `value` is a leaf.
    pub fn classify_value(value: &Value) -> Result<KeyShape> {
        let entries = array_like(value)?;
        Ok(KeyShape::of(entries.map(|(key, _)| key)))
    }

    /// Returns true if `value` is array-like with only integer keys.
    pub fn is_sequential(value: &Value) -> Result<bool> {
        Ok(Self::classify_value(value)?.is_sequential())
    }

    /// Returns true if `value` is array-like with at least one string key.
    pub fn is_associative(value: &Value) -> Result<bool> {
        Ok(Self::classify_value(value)?.is_associative())
    }
}

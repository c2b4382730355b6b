//! Ordered, keyed container with array-like storage.
//!
//! [`Collection`] owns an insertion-ordered mapping from [`Key`] to [`Value`].
//! Besides plain CRUD it offers functional combinators (see
//! [`combinators`]), key-shape classification (see [`classify`]), an
//! instance-local [`Cursor`], and the deep transform
//! ([`Collection::map_in_depth`]).
//!
//! # Ordering
//!
//! - Iteration order is insertion order.
//! - [`Collection::set`] on an existing key keeps that key's position.
//! - [`Collection::add`] always appends, under the next free integer key.
//!
//! ```
//! use keyed_collection::{Collection, Key};
//!
//! let mut c = Collection::new();
//! c.set("name", "Alice");
//! c.add("first").add("second");
//! c.set("name", "Bob");
//!
//! let keys: Vec<&Key> = c.keys().collect();
//! assert_eq!(keys, [&Key::from("name"), &Key::Int(0), &Key::Int(1)]);
//! assert_eq!(c.get(&Key::from("name")).and_then(|v| v.as_text()), Some("Bob"));
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use tracing::warn;

pub mod classify;
pub mod combinators;
pub mod cursor;
pub mod errors;
pub mod key;
pub mod value;

pub use classify::KeyShape;
pub use cursor::{Cursor, EntryRef};
pub use errors::CollectionError;
pub use key::Key;
pub use value::Value;

use crate::transform::KeyedAccess;

/// An insertion-ordered keyed container.
///
/// Each collection exclusively owns its entries. Operations that produce a
/// new collection ([`map`](Collection::map), [`filter`](Collection::filter),
/// [`partition`](Collection::partition), [`slice`](Collection::slice)) copy
/// the values they keep.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    entries: IndexMap<Key, Value>,
    /// Key handed out by the next `add`.
    next_index: i64,
    /// Set once `i64::MAX` has been used as a key.
    index_exhausted: bool,
    cursor: Cursor,
}

impl Collection {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from values, keyed `0..n`.
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut collection = Self::new();
        for value in values {
            collection.add(value);
        }
        collection
    }

    /// Appends `value` at the end, under the next free integer key.
    ///
    /// Never overwrites: once `i64::MAX` has been stored as a key there is no
    /// next key, and the value is dropped with a warning. Use
    /// [`try_add`](Collection::try_add) to observe that case.
    pub fn add(&mut self, value: impl Into<Value>) -> &mut Self {
        if let Err(err) = self.try_add(value) {
            warn!(error = %err, "Value not appended");
        }
        self
    }

    /// Appends `value` at the end and returns the key it was stored under.
    ///
    /// Fails with [`CollectionError::IndexExhausted`] once `i64::MAX` has
    /// been stored as a key, leaving the collection unchanged.
    pub fn try_add(&mut self, value: impl Into<Value>) -> crate::Result<Key> {
        if self.index_exhausted {
            return Err(CollectionError::IndexExhausted.into());
        }
        let key = Key::Int(self.next_index);
        self.set(key.clone(), value);
        Ok(key)
    }

    /// Sets `value` at `key`, returning the previous value if any.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        if let Key::Int(n) = key {
            match n.checked_add(1) {
                Some(next) => self.next_index = self.next_index.max(next),
                None => self.index_exhausted = true,
            }
        }
        self.entries.insert(key, value.into())
    }

    /// Builder-style variant of [`set`](Collection::set).
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Gets the value stored at `key`.
    ///
    /// A stored [`Value::Null`] comes back as `Some(&Value::Null)`; only an
    /// absent key yields `None`.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Gets a mutable reference to the value stored at `key`.
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Removes the entry at `key`, returning its value.
    ///
    /// Remaining entries keep their relative order.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        let (index, _, value) = self.entries.shift_remove_full(key)?;
        self.cursor.entry_removed(index);
        Some(value)
    }

    /// Removes the first entry whose value strictly equals `value`.
    ///
    /// Returns whether an entry was removed.
    pub fn remove_element(&mut self, value: &Value) -> bool {
        match self.entries.iter().position(|(_, v)| v == value) {
            Some(index) => {
                self.entries.shift_remove_index(index);
                self.cursor.entry_removed(index);
                true
            }
            None => false,
        }
    }

    /// Returns true if an entry exists at `key`, even if it holds null.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns true if any entry strictly equals `value`.
    pub fn contains(&self, value: &Value) -> bool {
        self.entries.values().any(|v| v == value)
    }

    /// Removes all entries and resets the next `add` key to 0.
    pub fn clear(&mut self) -> &mut Self {
        self.entries.clear();
        self.next_index = 0;
        self.index_exhausted = false;
        self.cursor.reset();
        self
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if there is at least one entry.
    pub fn is_loaded(&self) -> bool {
        !self.is_empty()
    }

    /// Number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries (alias of [`count`](Collection::count)).
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> + Clone {
        self.entries.iter()
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Iterates mutable values in insertion order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.entries.values_mut()
    }

    /// Snapshot of all entries.
    pub fn to_array(&self) -> IndexMap<Key, Value> {
        self.entries.clone()
    }

    /// Snapshot of all keys.
    pub fn key_array(&self) -> Vec<Key> {
        self.entries.keys().cloned().collect()
    }

    /// Snapshot of all values.
    pub fn value_array(&self) -> Vec<Value> {
        self.entries.values().cloned().collect()
    }
}

impl KeyedAccess for Collection {
    fn get_entry_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.get_mut(key)
    }

    fn put_entry(&mut self, key: Key, value: Value) {
        self.set(key, value);
    }
}

/// Order-sensitive equality over entries; cursor state is ignored.
impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        value::serialize_entries(self.entries.iter(), serializer)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl<K, V> FromIterator<(K, V)> for Collection
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<K, V> Extend<(K, V)> for Collection
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Collection {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

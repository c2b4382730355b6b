//! Instance-local cursor and first/last entry extraction.
//!
//! The cursor is an explicit index into a collection's entries. It is
//! independent of [`Collection::iter`], which never moves it. Two consumers
//! sharing one collection's cursor will interfere with each other.

use indexmap::IndexMap;

use super::{Collection, Key, Value, classify::array_like};
use crate::Result;

/// Forward/reset pointer over a collection's entries.
///
/// The position starts at the first entry. Once advanced past the last entry
/// the cursor is exhausted until reset by `first` or `last`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    /// Current position.
    pub fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn reset(&mut self) {
        self.position = 0;
    }

    /// Keeps the cursor on the same entry after the entry at `index` is
    /// shifted out. When the current entry itself is removed, the cursor
    /// lands on its successor.
    pub(crate) fn entry_removed(&mut self, index: usize) {
        if index < self.position {
            self.position -= 1;
        }
    }

    fn first<'a>(&mut self, entries: &'a IndexMap<Key, Value>) -> Option<&'a Value> {
        self.position = 0;
        self.current(entries)
    }

    fn last<'a>(&mut self, entries: &'a IndexMap<Key, Value>) -> Option<&'a Value> {
        self.position = entries.len().saturating_sub(1);
        self.current(entries)
    }

    fn key<'a>(&self, entries: &'a IndexMap<Key, Value>) -> Option<&'a Key> {
        entries.get_index(self.position).map(|(key, _)| key)
    }

    fn current<'a>(&self, entries: &'a IndexMap<Key, Value>) -> Option<&'a Value> {
        entries.get_index(self.position).map(|(_, value)| value)
    }

    fn advance<'a>(&mut self, entries: &'a IndexMap<Key, Value>) -> Option<&'a Value> {
        if self.position < entries.len() {
            self.position += 1;
        }
        self.current(entries)
    }
}

/// A borrowed `(key, value)` pair found at one end of a collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryRef<'a> {
    pub key: &'a Key,
    pub value: &'a Value,
}

impl<'a> From<(&'a Key, &'a Value)> for EntryRef<'a> {
    fn from((key, value): (&'a Key, &'a Value)) -> Self {
        Self { key, value }
    }
}

impl Collection {
    /// Moves the cursor to the first entry and returns its value.
    pub fn first(&mut self) -> Option<&Value> {
        self.cursor.first(&self.entries)
    }

    /// Moves the cursor to the last entry and returns its value.
    pub fn last(&mut self) -> Option<&Value> {
        self.cursor.last(&self.entries)
    }

    /// Key at the cursor, or `None` once exhausted.
    pub fn key(&self) -> Option<&Key> {
        self.cursor.key(&self.entries)
    }

    /// Value at the cursor, or `None` once exhausted.
    pub fn current(&self) -> Option<&Value> {
        self.cursor.current(&self.entries)
    }

    /// Advances the cursor and returns the value it lands on.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&Value> {
        self.cursor.advance(&self.entries)
    }

    /// The cursor itself.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// First entry, without touching the cursor.
    pub fn first_entry(&self) -> Option<EntryRef<'_>> {
        self.entries.first().map(EntryRef::from)
    }

    /// Last entry, without touching the cursor.
    pub fn last_entry(&self) -> Option<EntryRef<'_>> {
        self.entries.last().map(EntryRef::from)
    }

    /// First entry of any array-like value.
    ///
    /// Fails with an invalid-argument error when `value` is a leaf.
    pub fn first_entry_of(value: &Value) -> Result<Option<EntryRef<'_>>> {
        Ok(array_like(value)?.next().map(EntryRef::from))
    }

    /// Last entry of any array-like value.
    ///
    /// Fails with an invalid-argument error when `value` is a leaf.
    pub fn last_entry_of(value: &Value) -> Result<Option<EntryRef<'_>>> {
        Ok(array_like(value)?.last().map(EntryRef::from))
    }
}

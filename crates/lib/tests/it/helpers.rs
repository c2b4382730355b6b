//! Shared fixtures: custom composite types with differing capabilities.

use indexmap::IndexMap;
use keyed_collection::{
    Collection, Key, Value,
    transform::{Composite, KeyedAccess},
};

/// Keyed, writable, and able to create an empty copy of itself.
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: IndexMap<Key, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

impl KeyedAccess for Record {
    fn get_entry_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.fields.get_mut(key)
    }

    fn put_entry(&mut self, key: Key, value: Value) {
        self.fields.insert(key, value);
    }
}

impl Composite for Record {
    fn type_name(&self) -> &'static str {
        "Record"
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&Key, &Value)> + '_> {
        Box::new(self.fields.iter())
    }

    fn keyed_access(&mut self) -> Option<&mut dyn KeyedAccess> {
        Some(self)
    }

    fn is_keyed(&self) -> bool {
        true
    }

    fn create_empty_like(&self) -> Option<Box<dyn Composite>> {
        Some(Box::new(Record::default()))
    }

    fn clone_box(&self) -> Box<dyn Composite> {
        Box::new(self.clone())
    }
}

/// Iterable only: no keyed writes, no empty construction.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    fields: Vec<(Key, Value)>,
}

impl Snapshot {
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }
}

impl Composite for Snapshot {
    fn type_name(&self) -> &'static str {
        "Snapshot"
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&Key, &Value)> + '_> {
        Box::new(self.fields.iter().map(|(key, value)| (key, value)))
    }

    fn clone_box(&self) -> Box<dyn Composite> {
        Box::new(self.clone())
    }
}

/// Keyed and writable, but cannot create an empty copy of itself.
#[derive(Debug, Clone, Default)]
pub struct Sealed {
    fields: IndexMap<Key, Value>,
}

impl Sealed {
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

impl KeyedAccess for Sealed {
    fn get_entry_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.fields.get_mut(key)
    }

    fn put_entry(&mut self, key: Key, value: Value) {
        self.fields.insert(key, value);
    }
}

impl Composite for Sealed {
    fn type_name(&self) -> &'static str {
        "Sealed"
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&Key, &Value)> + '_> {
        Box::new(self.fields.iter())
    }

    fn keyed_access(&mut self) -> Option<&mut dyn KeyedAccess> {
        Some(self)
    }

    fn is_keyed(&self) -> bool {
        true
    }

    fn clone_box(&self) -> Box<dyn Composite> {
        Box::new(self.clone())
    }
}

/// Wraps a composite fixture as a value
pub fn object(composite: impl Composite + 'static) -> Value {
    Value::Object(Box::new(composite))
}

/// Multiplies integers by ten, leaving every other leaf as is
pub fn times_ten(value: &Value) -> Value {
    match value {
        Value::Int(n) => Value::Int(n * 10),
        other => other.clone(),
    }
}

/// Collection `{0: a, 1: b, 2: c, 3: d}`
pub fn abcd() -> Collection {
    Collection::from_values(["a", "b", "c", "d"])
}

/// Shorthand for a key lookup
pub fn at<'a>(collection: &'a Collection, key: impl Into<Key>) -> Option<&'a Value> {
    collection.get(&key.into())
}

//! Capabilities a keyed composite object can expose to the deep-transform engine.
//!
//! - [`Composite`]: ordered keyed iteration, plus optional write access and
//!   identity-preserving reconstruction
//! - [`KeyedAccess`]: random-access keyed read/write, used both for building
//!   transformed output and for mirroring leaves into an export sink

use std::fmt;

use crate::collection::{Key, Value};

/// Random-access keyed write support.
///
/// [`Collection`](crate::Collection) implements this trait. Custom composite
/// types opt in by implementing it and returning `Some(self)` from
/// [`Composite::keyed_access`].
pub trait KeyedAccess {
    /// Mutable access to the value stored at `key`, if any.
    fn get_entry_mut(&mut self, key: &Key) -> Option<&mut Value>;

    /// Stores `value` at `key`, replacing any previous value in place.
    fn put_entry(&mut self, key: Key, value: Value);
}

/// A custom object exposing ordered keyed iteration.
///
/// Any value implementing this trait is treated as a composite node by
/// [`deep_map`](crate::transform::deep_map), so its entries are walked and
/// transformed recursively.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use keyed_collection::{Key, Value};
/// use keyed_collection::transform::{Composite, KeyedAccess};
///
/// #[derive(Debug, Clone, Default)]
/// struct Settings {
///     fields: IndexMap<Key, Value>,
/// }
///
/// impl KeyedAccess for Settings {
///     fn get_entry_mut(&mut self, key: &Key) -> Option<&mut Value> {
///         self.fields.get_mut(key)
///     }
///
///     fn put_entry(&mut self, key: Key, value: Value) {
///         self.fields.insert(key, value);
///     }
/// }
///
/// impl Composite for Settings {
///     fn type_name(&self) -> &'static str {
///         "Settings"
///     }
///
///     fn entries(&self) -> Box<dyn Iterator<Item = (&Key, &Value)> + '_> {
///         Box::new(self.fields.iter())
///     }
///
///     fn keyed_access(&mut self) -> Option<&mut dyn KeyedAccess> {
///         Some(self)
///     }
///
///     fn is_keyed(&self) -> bool {
///         true
///     }
///
///     fn create_empty_like(&self) -> Option<Box<dyn Composite>> {
///         Some(Box::new(Settings::default()))
///     }
///
///     fn clone_box(&self) -> Box<dyn Composite> {
///         Box::new(self.clone())
///     }
/// }
/// ```
pub trait Composite: fmt::Debug {
    /// Name of the concrete type, used for equality and diagnostics.
    fn type_name(&self) -> &'static str;

    /// Entries in iteration order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&Key, &Value)> + '_>;

    /// Keyed write capability, if this type supports it.
    fn keyed_access(&mut self) -> Option<&mut dyn KeyedAccess> {
        None
    }

    /// Whether [`keyed_access`](Composite::keyed_access) returns `Some`.
    ///
    /// Only keyed types are candidates for identity-preserving
    /// reconstruction; read-only types are always rebuilt as a generic
    /// collection.
    fn is_keyed(&self) -> bool {
        false
    }

    /// A new, empty instance of the same concrete type.
    ///
    /// Types returning `None` are rebuilt as a generic collection when
    /// transformed.
    fn create_empty_like(&self) -> Option<Box<dyn Composite>> {
        None
    }

    /// Clones this object behind a fresh box.
    fn clone_box(&self) -> Box<dyn Composite>;

    /// Number of entries.
    fn len(&self) -> usize {
        self.entries().count()
    }

    /// Returns true if there are no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Clone for Box<dyn Composite> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

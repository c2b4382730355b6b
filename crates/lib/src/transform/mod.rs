//! Recursive, shape-preserving deep transform.
//!
//! [`deep_map`] walks an arbitrarily nested tree of collections and custom
//! keyed objects, hands every leaf to a caller-supplied transform, and
//! rebuilds the tree around the transformed leaves. Optionally every
//! transformed leaf is also written into an export sink: a second,
//! caller-owned structure that may have a different shape.
//!
//! # Output container kind
//!
//! For each composite node the engine picks the kind of the rebuilt node:
//!
//! - with [`DeepMapOptions::force_generic`], always a [`Collection`]
//! - a plain [`Collection`] input is rebuilt as a [`Collection`]
//! - a keyed custom object ([`Composite::is_keyed`]) is rebuilt as a fresh
//!   instance of its own type, via [`Composite::create_empty_like`], provided
//!   that instance supports keyed writes; otherwise it falls back to a
//!   [`Collection`] (or fails, under [`DeepMapOptions::strict_identity`])
//! - a read-only custom object is rebuilt as a [`Collection`], strict or not
//!
//! # Export mirroring
//!
//! Mirroring is best effort. When the sink has no keyed-writable value at the
//! key of a nested composite, mirroring silently stops for that subtree and
//! continues everywhere else. The engine never creates sink nodes.
//!
//! Input trees are owned values and therefore acyclic; recursion depth equals
//! nesting depth and can be bounded with [`DeepMapOptions::max_depth`].

use tracing::{debug, trace};

use crate::Result;
use crate::collection::{Collection, Key, Value};

pub mod errors;
pub mod traits;

pub use errors::TransformError;
pub use traits::{Composite, KeyedAccess};

/// Options controlling a deep transform.
///
/// ```
/// # use keyed_collection::transform::DeepMapOptions;
/// let options = DeepMapOptions::new().force_generic(true).max_depth(64);
/// assert!(options.force_generic);
/// assert_eq!(options.max_depth, Some(64));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeepMapOptions {
    /// Rebuild every composite as a generic [`Collection`].
    pub force_generic: bool,
    /// Fail instead of falling back when a keyed custom object cannot be
    /// rebuilt as its own type. Read-only objects are unaffected.
    pub strict_identity: bool,
    /// Maximum nesting depth; the root counts as depth 1.
    pub max_depth: Option<usize>,
}

impl DeepMapOptions {
    /// Default options: identity-preserving, lenient, unbounded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`DeepMapOptions::force_generic`].
    pub fn force_generic(mut self, force_generic: bool) -> Self {
        self.force_generic = force_generic;
        self
    }

    /// Sets [`DeepMapOptions::strict_identity`].
    pub fn strict_identity(mut self, strict_identity: bool) -> Self {
        self.strict_identity = strict_identity;
        self
    }

    /// Sets [`DeepMapOptions::max_depth`].
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// A value as seen by the engine: a leaf or one of the two composite kinds.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// Anything without keyed children
    Leaf(&'a Value),
    /// A generic collection
    Plain(&'a Collection),
    /// A custom keyed object
    Custom(&'a dyn Composite),
}

impl<'a> Node<'a> {
    /// Classifies a value.
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Collection(collection) => Node::Plain(collection),
            Value::Object(object) => Node::Custom(&**object),
            leaf => Node::Leaf(leaf),
        }
    }

    /// Returns true for the composite kinds.
    pub fn is_composite(&self) -> bool {
        !matches!(self, Node::Leaf(_))
    }

    /// Ordered children of a composite node, `None` for a leaf.
    pub fn entries(&self) -> Option<Box<dyn Iterator<Item = (&'a Key, &'a Value)> + 'a>> {
        match *self {
            Node::Leaf(_) => None,
            Node::Plain(collection) => Some(Box::new(collection.iter())),
            Node::Custom(object) => Some(object.entries()),
        }
    }

    fn type_name(&self) -> &'static str {
        match *self {
            Node::Leaf(value) => value.type_name(),
            Node::Plain(_) => "collection",
            Node::Custom(object) => object.type_name(),
        }
    }
}

/// A node under construction.
enum Output {
    Generic(Collection),
    Custom(Box<dyn Composite>),
}

impl Output {
    fn for_node(node: &Node<'_>, options: &DeepMapOptions) -> Result<Self> {
        let Node::Custom(object) = *node else {
            return Ok(Output::Generic(Collection::new()));
        };
        if options.force_generic {
            return Ok(Output::Generic(Collection::new()));
        }

        if let Some(mut empty) = object.create_empty_like()
            && empty.keyed_access().is_some()
        {
            return Ok(Output::Custom(empty));
        }

        if options.strict_identity && object.is_keyed() {
            return Err(TransformError::IdentityUnavailable {
                type_name: object.type_name().to_string(),
            }
            .into());
        }
        debug!(
            type_name = object.type_name(),
            "No keyed empty instance available, rebuilding as collection"
        );
        Ok(Output::Generic(Collection::new()))
    }

    fn put(&mut self, key: Key, value: Value) {
        match self {
            Output::Generic(collection) => {
                collection.set(key, value);
            }
            Output::Custom(object) => {
                // Keyed access was checked when the output was created
                if let Some(access) = object.keyed_access() {
                    access.put_entry(key, value);
                }
            }
        }
    }

    fn into_value(self) -> Value {
        match self {
            Output::Generic(collection) => Value::Collection(collection),
            Output::Custom(object) => Value::Object(object),
        }
    }

    fn into_collection(self) -> Collection {
        match self {
            Output::Generic(collection) => collection,
            Output::Custom(object) => object
                .entries()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }
}

/// Deep-maps `root`, returning the rebuilt tree.
///
/// `leaf` receives only leaf values, never keys. When `export` is given,
/// every transformed leaf is also written into it at the same key path, as
/// far as the sink's shape allows.
///
/// Fails when `root` is a leaf, when a depth limit is exceeded, or when
/// strict identity cannot be honoured.
///
/// ```
/// use keyed_collection::{Collection, Value};
/// use keyed_collection::transform::{DeepMapOptions, deep_map};
///
/// let tree = Value::from(
///     Collection::new()
///         .with("a", Collection::new().with("b", 1).with("c", 2))
///         .with("d", 3),
/// );
/// let times_ten = |v: &Value| Value::from(v.as_int().unwrap_or(0) * 10);
/// let mapped = deep_map(&tree, times_ten, &DeepMapOptions::new(), None).unwrap();
///
/// let expected = Value::from(
///     Collection::new()
///         .with("a", Collection::new().with("b", 10).with("c", 20))
///         .with("d", 30),
/// );
/// assert_eq!(mapped, expected);
/// ```
pub fn deep_map<F>(
    root: &Value,
    mut leaf: F,
    options: &DeepMapOptions,
    export: Option<&mut dyn KeyedAccess>,
) -> Result<Value>
where
    F: FnMut(&Value) -> Value,
{
    let node = Node::classify(root);
    if !node.is_composite() {
        return Err(TransformError::NotComposite {
            type_name: node.type_name().to_string(),
        }
        .into());
    }
    Ok(map_node(node, &mut leaf, options, export, 1)?.into_value())
}

fn map_node<F>(
    node: Node<'_>,
    leaf: &mut F,
    options: &DeepMapOptions,
    mut export: Option<&mut dyn KeyedAccess>,
    depth: usize,
) -> Result<Output>
where
    F: FnMut(&Value) -> Value,
{
    if let Some(max_depth) = options.max_depth
        && depth > max_depth
    {
        return Err(TransformError::DepthExceeded { max_depth }.into());
    }

    let mut output = Output::for_node(&node, options)?;
    let Some(entries) = node.entries() else {
        return Ok(output);
    };

    for (key, child) in entries {
        let child = Node::classify(child);
        if let Node::Leaf(value) = child {
            let transformed = leaf(value);
            if let Some(sink) = export.as_deref_mut() {
                sink.put_entry(key.clone(), transformed.clone());
            }
            output.put(key.clone(), transformed);
            continue;
        }

        let nested = match export.as_deref_mut() {
            Some(sink) => {
                let slot = sink.get_entry_mut(key).and_then(Value::as_keyed_mut);
                if slot.is_none() {
                    trace!(%key, "Export sink has no keyed slot, mirroring stops for subtree");
                }
                slot
            }
            None => None,
        };
        let mapped = map_node(child, leaf, options, nested, depth + 1)?;
        output.put(key.clone(), mapped.into_value());
    }

    Ok(output)
}

impl Collection {
    /// Deep-maps this collection into a brand new collection.
    ///
    /// Every nested composite is rebuilt as a generic [`Collection`],
    /// whatever `options.force_generic` says. `self` is left untouched.
    pub fn map_in_depth<F>(&self, mut leaf: F, options: &DeepMapOptions) -> Result<Collection>
    where
        F: FnMut(&Value) -> Value,
    {
        let options = options.force_generic(true);
        Ok(map_node(Node::Plain(self), &mut leaf, &options, None, 1)?.into_collection())
    }

    /// Deep-maps this collection, mirroring every transformed leaf into
    /// `export`.
    ///
    /// The rebuilt tree is discarded: this returns `self`, untransformed.
    /// The only observable effect is on `export`.
    pub fn map_in_depth_into<F>(
        &self,
        mut leaf: F,
        options: &DeepMapOptions,
        export: &mut dyn KeyedAccess,
    ) -> Result<&Self>
    where
        F: FnMut(&Value) -> Value,
    {
        map_node(Node::Plain(self), &mut leaf, options, Some(export), 1)?;
        Ok(self)
    }
}

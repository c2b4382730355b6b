//!
//! Keyed Collection: an ordered, keyed container with functional combinators
//! and a recursive deep-transform engine.
//!
//! ## Core Concepts
//!
//! * **Collections (`collection::Collection`)**: Insertion-ordered mappings from integer or string
//!   keys to values, with CRUD, snapshot views, slicing and an instance-local cursor.
//! * **Values (`collection::Value`)**: Leaves (null, booleans, numbers, text) or composites
//!   (nested collections and custom keyed objects).
//! * **Key shapes (`collection::KeyShape`)**: Classification of a key set as sequential
//!   (integer keys only), associative, or empty.
//! * **Deep transform (`transform::deep_map`)**: Rebuilds a nested tree around transformed
//!   leaves, preserving custom object types, and optionally mirrors every transformed leaf
//!   into a caller-owned export sink.
//! * **JSON bridge (`json`)**: Decoding into and encoding from collections, with categorized
//!   decode errors.

pub mod collection;
pub mod constants;
pub mod json;
pub mod transform;

/// Re-export the core types for easier access.
pub use collection::{Collection, Key, KeyShape, Value};

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from the collection module
    #[error(transparent)]
    Collection(collection::CollectionError),

    /// Structured errors from the json module
    #[error(transparent)]
    Json(json::JsonError),

    /// Structured errors from the transform module
    #[error(transparent)]
    Transform(transform::TransformError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Collection(_) => "collection",
            Error::Json(_) => "json",
            Error::Transform(_) => "transform",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error was caused by a malformed or unsuitable argument.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Collection(collection_err) => collection_err.is_invalid_argument(),
            Error::Json(json_err) => json_err.is_invalid_argument(),
            Error::Transform(transform_err) => transform_err.is_invalid_argument(),
            Error::Serialize(_) => false,
        }
    }

    /// Check if this error is JSON-related.
    pub fn is_json_error(&self) -> bool {
        matches!(self, Error::Json(_) | Error::Serialize(_))
    }

    /// Check if this error is a JSON syntax error.
    pub fn is_json_syntax_error(&self) -> bool {
        match self {
            Error::Json(json_err) => json_err.is_syntax_error(),
            _ => false,
        }
    }

    /// Check if this error is a depth limit violation.
    pub fn is_depth_exceeded(&self) -> bool {
        match self {
            Error::Json(json_err) => json_err.is_depth_error(),
            Error::Transform(transform_err) => transform_err.is_depth_exceeded(),
            _ => false,
        }
    }

    /// Check if this error is transform-related.
    pub fn is_transform_error(&self) -> bool {
        matches!(self, Error::Transform(_))
    }
}

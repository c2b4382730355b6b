//! Error types for collection operations.
//!
//! Most collection operations cannot fail: lookups on absent keys return
//! `None` rather than an error. The failures here come from the static
//! helpers that accept an arbitrary [`Value`](super::Value) and require it to
//! be array-like, and from appending once the integer keys run out.

use thiserror::Error;

/// Structured error types for collection operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CollectionError {
    /// A helper expecting an array-like value received a leaf
    #[error("Invalid argument: expected an iterable collection or object, found {type_name}")]
    NotIterable { type_name: String },

    /// `add` has no key left: `i64::MAX` is already in use
    #[error("Cannot append: the next integer key would exceed i64::MAX")]
    IndexExhausted,
}

impl CollectionError {
    /// Check if this error was caused by a malformed argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CollectionError::NotIterable { .. })
    }

    /// Check if this error was caused by a non-iterable argument
    pub fn is_not_iterable(&self) -> bool {
        matches!(self, CollectionError::NotIterable { .. })
    }

    /// Check if this error was caused by running out of integer keys
    pub fn is_index_exhausted(&self) -> bool {
        matches!(self, CollectionError::IndexExhausted)
    }
}

// Conversion from CollectionError to the main Error type
impl From<CollectionError> for crate::Error {
    fn from(err: CollectionError) -> Self {
        crate::Error::Collection(err)
    }
}

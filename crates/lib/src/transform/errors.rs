//! Error types for the deep-transform engine.
//!
//! Shape mismatches in an export sink are never errors; mirroring just stops
//! for that subtree. The failures below are about the input tree itself.

use thiserror::Error;

/// Structured error types for deep-transform operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TransformError {
    /// The root passed to a deep transform is a leaf
    #[error("Invalid argument: deep transform requires a composite root, found {type_name}")]
    NotComposite { type_name: String },

    /// Strict identity was requested but the type cannot create an empty copy of itself
    #[error("Invalid argument: {type_name} cannot create an empty instance of itself")]
    IdentityUnavailable { type_name: String },

    /// Nesting exceeded the configured depth limit
    #[error("Deep transform exceeded maximum depth of {max_depth}")]
    DepthExceeded { max_depth: usize },
}

impl TransformError {
    /// Check if this error was caused by a malformed argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            TransformError::NotComposite { .. } | TransformError::IdentityUnavailable { .. }
        )
    }

    /// Check if this error is a depth limit violation
    pub fn is_depth_exceeded(&self) -> bool {
        matches!(self, TransformError::DepthExceeded { .. })
    }

    /// Get the type name involved, if any
    pub fn type_name(&self) -> Option<&str> {
        match self {
            TransformError::NotComposite { type_name }
            | TransformError::IdentityUnavailable { type_name } => Some(type_name),
            TransformError::DepthExceeded { .. } => None,
        }
    }
}

// Conversion from TransformError to the main Error type
impl From<TransformError> for crate::Error {
    fn from(err: TransformError) -> Self {
        crate::Error::Transform(err)
    }
}

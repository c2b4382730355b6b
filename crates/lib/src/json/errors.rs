//! Error types for the JSON bridge.
//!
//! Every decode or encode failure is an invalid-argument error, split into
//! categories so callers can tell a truncated document from a bad escape
//! or an overly deep one.

use thiserror::Error;

/// Structured error types for JSON decoding and encoding.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum JsonError {
    /// Nesting exceeded the configured or parser depth limit
    #[error("JSON error: maximum stack depth exceeded ({detail})")]
    DepthExceeded { detail: String },

    /// Document ended before its structure was closed
    #[error("JSON error: invalid or malformed JSON ({detail})")]
    StateMismatch { detail: String },

    /// Unescaped control character inside a string
    #[error("JSON error: control character error, possibly incorrectly encoded ({detail})")]
    ControlCharacter { detail: String },

    /// Input is not valid JSON syntax
    #[error("JSON error: syntax error ({detail})")]
    Syntax { detail: String },

    /// Input bytes are not valid UTF-8
    #[error("JSON error: malformed UTF-8 characters, possibly incorrectly encoded ({detail})")]
    MalformedUtf8 { detail: String },

    /// A `\u` escape does not form a valid UTF-16 code point
    #[error("JSON error: malformed UTF-16 characters, possibly incorrectly encoded ({detail})")]
    MalformedUtf16 { detail: String },

    /// A number is out of range, or a float is NaN or infinite
    #[error("JSON error: NAN or INF value ({detail})")]
    InfOrNan { detail: String },

    /// An object property name that cannot be represented
    #[error("JSON error: invalid property name {name:?}")]
    InvalidPropertyName { name: String },

    /// Any other failure
    #[error("JSON error: unknown error ({detail})")]
    Unknown { detail: String },
}

impl JsonError {
    /// Categorizes a `serde_json` decode failure.
    pub(crate) fn from_decode(err: &serde_json::Error) -> Self {
        use serde_json::error::Category;

        let detail = err.to_string();
        if detail.contains("recursion limit exceeded") {
            JsonError::DepthExceeded { detail }
        } else if detail.contains("control character") {
            JsonError::ControlCharacter { detail }
        } else if detail.contains("unicode code point")
            || detail.contains("surrogate")
            || detail.contains("hex escape")
        {
            JsonError::MalformedUtf16 { detail }
        } else if detail.contains("number out of range") {
            JsonError::InfOrNan { detail }
        } else {
            match err.classify() {
                Category::Eof => JsonError::StateMismatch { detail },
                Category::Syntax => JsonError::Syntax { detail },
                Category::Io | Category::Data => JsonError::Unknown { detail },
            }
        }
    }

    /// Check if this error was caused by a malformed argument
    pub fn is_invalid_argument(&self) -> bool {
        true
    }

    /// Check if this error is a plain syntax error
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, JsonError::Syntax { .. })
    }

    /// Check if this error is a depth limit violation
    pub fn is_depth_error(&self) -> bool {
        matches!(self, JsonError::DepthExceeded { .. })
    }

    /// Check if this error is about character encoding
    pub fn is_encoding_error(&self) -> bool {
        matches!(
            self,
            JsonError::ControlCharacter { .. }
                | JsonError::MalformedUtf8 { .. }
                | JsonError::MalformedUtf16 { .. }
        )
    }
}

// Conversion from JsonError to the main Error type
impl From<JsonError> for crate::Error {
    fn from(err: JsonError) -> Self {
        crate::Error::Json(err)
    }
}

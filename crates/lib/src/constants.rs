//! Constants used throughout the library.

/// Default maximum nesting depth for JSON decoding and encoding.
///
/// Matches the hard recursion limit of the underlying parser.
pub const DEFAULT_JSON_DEPTH: usize = 128;

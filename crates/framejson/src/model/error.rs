//! Strict accessor error type.

use thiserror::Error;

/// Raised by the strict indexing operations on [`crate::JsonValue`].
///
/// Distinct from parse and binary format errors: these report a misuse of
/// an in-memory value, not a malformed input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("value does not represent an object")]
    NotAnObject,
    #[error("value does not represent an array")]
    NotAnArray,
    #[error("index {0} is out of bounds")]
    IndexOutOfBounds(usize),
}

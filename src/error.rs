#![deny(missing_docs)]

//! Errors of the fallible byte level constructors

/// Error when building a value from outside data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The byte slice does not have the size of the primitive
    #[error("expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// size of the primitive
        expected: usize,
        /// length of the slice given
        actual: usize,
    },
}

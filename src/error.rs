//! Error types shared by every fallible operation on a [`crate::Cord`].

/// Errors a [`crate::Cord`] operation can produce.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation is not implemented for the node's current state.
    #[error("unimplemented")]
    Unimplemented,
    /// Something that should never happen happened (unreachable in theory).
    #[error("unexpected internal state")]
    Unexpected,
    /// An index or interval fell outside `[0, length)`.
    #[error("index out of range")]
    RangeError,
    /// A UTF-8 lead byte did not match any of the four valid patterns.
    #[error("invalid byte sequence")]
    InvalidByteSequence,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

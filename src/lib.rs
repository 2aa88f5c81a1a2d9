//! An immutable, code-point-indexed Unicode string that builds a lazily
//! evaluated graph of nodes instead of copying bytes on every
//! substring/concatenation/repetition.
//!
//! A [`Cord`] never mutates the string it was built from. Slicing,
//! concatenating, and repeating all return new handles into a shared node
//! graph; no bytes move until something forces a node to materialize — and
//! that only happens when the library itself decides it's cheaper to
//! collapse a lazy node than to keep the graph around. See [`Cord::replace`]
//! for the one place that distinction is visible from outside the crate.
//!
//! ```rs
//! use ropestr::{Cord, Encoding};
//!
//! let greeting = Cord::from_copy(b"  hello, world  ", Encoding::Ascii);
//! let trimmed = greeting.trim();
//! let shouted = &trimmed + &Cord::from_copy(b"!", Encoding::Ascii);
//! assert_eq!(shouted.length(), 13);
//!
//! let mut out = Vec::new();
//! shouted.print(&mut out).unwrap();
//! assert_eq!(out, b"hello, world!");
//! ```
//!
//! Four encodings are supported for the bytes backing a leaf node:
//! ASCII, UTF-8, UTF-16BE, and native-endian UTF-32. `Encoding::Utf16Be`
//! decodes surrogate-like units with a formula that does not match the
//! standard UTF-16 algorithm — this is a known discrepancy inherited from
//! the system this crate reimplements, preserved deliberately rather than
//! silently corrected.

mod codec;
mod cord;
mod error;
mod node;

pub use cord::Cord;
pub use error::Error;

/// The byte encoding backing a leaf node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Ascii,
    Utf8,
    /// Decoding surrogate-like units uses a non-standard formula — see
    /// the crate-level docs.
    Utf16Be,
    /// Native-endian 4-byte code units.
    Utf32,
}

//! The public handle onto the node graph. Cloning a `Cord` is cheap (it
//! bumps a wrapper count, not the underlying bytes); dropping one may
//! trigger the cost-gated retirement described in [`crate::node`].

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::node::{self, NodeRef};
use crate::Encoding;

/// An immutable, lazily-evaluated Unicode string.
pub struct Cord {
    pub(crate) node: NodeRef,
}

impl Cord {
    /// An empty string.
    pub fn empty() -> Cord {
        Cord::wrap(node::empty())
    }

    /// Builds a string backed by a shared, reference-counted buffer.
    /// Cheap: no bytes are copied. Every clone of the resulting `Cord`
    /// (and every substring of it, until reconstruction) keeps `bytes`
    /// alive in its entirety.
    pub fn from_const(bytes: Rc<[u8]>, encoding: Encoding) -> Cord {
        Cord::wrap(node::leaf::new_const(bytes, encoding))
    }

    /// Builds a string backed by a private copy of `bytes`.
    pub fn from_copy(bytes: &[u8], encoding: Encoding) -> Cord {
        Cord::wrap(node::leaf::new_copy(bytes, encoding))
    }

    fn wrap(node: NodeRef) -> Cord {
        node::wrapper_ref_add(&node);
        Cord { node }
    }

    /// Number of code points in this string.
    pub fn length(&self) -> usize {
        node::length(&self.node)
    }

    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// The code point at `index`.
    pub fn code_unit_at(&self, index: usize) -> Result<u32> {
        node::code_unit_at(&self.node, index)
    }

    /// Three-way lexicographic comparison, code point by code point, with
    /// length as the tie-break.
    pub fn compare_to(&self, other: &Cord) -> std::cmp::Ordering {
        node::compare(&self.node, &other.node)
    }

    /// The substring `[start, end)`. Builds a new lazy node; no bytes are
    /// copied until something forces reconstruction.
    pub fn substring(&self, start: usize, end: usize) -> Result<Cord> {
        Ok(Cord::wrap(node::substring(&self.node, start, end)?))
    }

    /// Writes the whole string to `sink`, encoded as UTF-8 regardless of
    /// the leaf encoding(s) backing it.
    pub fn print<W: std::io::Write>(&self, sink: &mut W) -> std::io::Result<()> {
        node::print(&self.node, sink)
    }

    /// Writes the substring `[start, end)` to `sink`.
    pub fn print_range<W: std::io::Write>(
        &self,
        sink: &mut W,
        start: usize,
        end: usize,
    ) -> Result<()> {
        node::print_range(&self.node, sink, start, end)
    }

    /// This string with leading and trailing whitespace removed.
    pub fn trim(&self) -> Cord {
        node::trim(&self.node)
            .map(Cord::wrap)
            .unwrap_or_else(|_| self.clone())
    }

    /// This string with leading whitespace removed.
    pub fn trim_left(&self) -> Cord {
        node::trim_left(&self.node)
            .map(Cord::wrap)
            .unwrap_or_else(|_| self.clone())
    }

    /// This string with trailing whitespace removed.
    pub fn trim_right(&self) -> Cord {
        node::trim_right(&self.node)
            .map(Cord::wrap)
            .unwrap_or_else(|_| self.clone())
    }

    /// Replaces the contents of this handle with `other`, releasing the
    /// previous node unconditionally (no cost comparison) the moment its
    /// wrapper count reaches zero — the analogue of the original's
    /// `operator=`, which does not apply the cost-gated check its
    /// destructor does. An ordinary drop (scope exit, a plain rebind that
    /// lets the old value fall out of scope) goes through [`Drop`]
    /// instead, which *does* apply the check.
    pub fn replace(&mut self, other: &Cord) {
        let old = std::mem::replace(&mut self.node, other.node.clone());
        node::wrapper_ref_add(&self.node);
        node::release_handle_unconditional(&old);
    }
}

impl Clone for Cord {
    fn clone(&self) -> Cord {
        Cord::wrap(self.node.clone())
    }
}

impl Drop for Cord {
    fn drop(&mut self) {
        node::release_handle(&self.node);
    }
}

impl std::ops::Add<&Cord> for &Cord {
    type Output = Cord;

    fn add(self, other: &Cord) -> Cord {
        Cord::wrap(node::concatenation::new(&self.node, &other.node))
    }
}

impl std::ops::Mul<usize> for &Cord {
    type Output = Cord;

    fn mul(self, times: usize) -> Cord {
        Cord::wrap(node::repetition::new(&self.node, times))
    }
}

impl PartialEq for Cord {
    fn eq(&self, other: &Self) -> bool {
        self.compare_to(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Cord {}

impl std::fmt::Display for Cord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = Vec::new();
        self.print(&mut buf).map_err(|_| std::fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

impl std::fmt::Debug for Cord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cord({:?})", self.to_string())
    }
}

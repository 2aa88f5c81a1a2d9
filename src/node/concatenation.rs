//! Lazy concatenation of two nodes — no copying at construction time,
//! `length`/`code_unit_at` simply route to whichever side covers the
//! requested index.

use super::{add_referencer, length, new_node, print_range as node_print_range, NodeRef, Payload};
use crate::error::Result;

pub(crate) fn new(left: &NodeRef, right: &NodeRef) -> NodeRef {
    let node = new_node(Payload::Concatenation {
        left: left.clone(),
        right: right.clone(),
    });
    add_referencer(left, &node);
    add_referencer(right, &node);
    node
}

/// Locates which side(s) of the concatenation cover `[start, end)` and
/// splits the write across the boundary when the range straddles it.
pub(crate) fn print_range<W: std::io::Write>(
    left: &NodeRef,
    right: &NodeRef,
    sink: &mut W,
    start: usize,
    end: usize,
) -> Result<()> {
    let left_len = length(left);
    if end <= left_len {
        node_print_range(left, sink, start, end)
    } else if start >= left_len {
        node_print_range(right, sink, start - left_len, end - left_len)
    } else {
        node_print_range(left, sink, start, left_len)?;
        node_print_range(right, sink, 0, end - left_len)
    }
}

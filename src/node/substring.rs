//! Lazy slice of another node: `[start, end)` into a source, with no bytes
//! of its own until [`super::reconstruct`] forces it to materialize.

use super::{add_referencer, new_node, NodeRef, Payload};

pub(crate) fn new(source: &NodeRef, start: usize, end: usize) -> NodeRef {
    let node = new_node(Payload::Substring {
        source: source.clone(),
        start,
        end,
    });
    add_referencer(source, &node);
    node
}

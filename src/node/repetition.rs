//! Lazy repetition of a node `times` times — `code_unit_at` reduces the
//! index modulo the source's length instead of copying it out `times`
//! times at construction.

use super::{add_referencer, length, new_node, print_range as node_print_range, NodeRef, Payload};
use crate::error::Result;

pub(crate) fn new(source: &NodeRef, times: usize) -> NodeRef {
    let node = new_node(Payload::Repetition {
        source: source.clone(),
        times,
    });
    add_referencer(source, &node);
    node
}

/// Walks each repeated copy of `source` and prints the slice of `[start,
/// end)` that falls inside it, the repetition analogue of
/// [`super::concatenation::print_range`]'s boundary split.
pub(crate) fn print_range<W: std::io::Write>(
    source: &NodeRef,
    sink: &mut W,
    start: usize,
    end: usize,
) -> Result<()> {
    let unit_len = length(source);
    if unit_len == 0 {
        return Ok(());
    }
    let first = start / unit_len;
    let last = (end.saturating_sub(1)) / unit_len;
    for i in first..=last {
        let iteration_start = i * unit_len;
        let iteration_end = iteration_start + unit_len;
        let overlap_start = start.max(iteration_start);
        let overlap_end = end.min(iteration_end);
        if overlap_start < overlap_end {
            node_print_range(
                source,
                sink,
                overlap_start - iteration_start,
                overlap_end - iteration_start,
            )?;
        }
    }
    Ok(())
}

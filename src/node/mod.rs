//! The lifecycle core: reference counting, the back-reference ("referencer")
//! graph, and the cost comparison that decides whether a node is retired
//! (its dependents forced to materialize) or left alone.
//!
//! Every node in the rope lives behind an `Rc<RefCell<Node>>`. A node that
//! depends on another (a `Substring`'s source, a `Concatenation`'s two
//! children, a `Repetition`'s source) holds a *strong* `Rc` to it. Nodes
//! that might need to be told "your source is going away, materialize now"
//! are recorded on the source as *weak* back-references — so the graph
//! never has a reference cycle, and a source can always find out who still
//! depends on it without keeping them alive artificially.
//!
//! `wrapper_refs` is a second, independent counter: it counts only
//! [`crate::Cord`] handles directly naming a node, never the strong `Rc`
//! edges other nodes hold. It is the Rust analogue of the original's
//! `_refCount` — `Rc::strong_count` answers "is anyone still pointing at
//! this", `wrapper_refs` answers "does a caller still name this node
//! directly", and only the second question feeds the cost comparison.

pub mod concatenation;
pub mod leaf;
pub mod repetition;
pub mod substring;

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::codec;
use crate::error::{Error, Result};
use crate::Encoding;

pub(crate) type NodeRef = Rc<std::cell::RefCell<Node>>;
pub(crate) type WeakNodeRef = Weak<std::cell::RefCell<Node>>;

/// Per-node struct overhead used in cost formulas, standing in for the
/// original's `sizeof(SomeSequence)`.
const NODE_OVERHEAD: usize = std::mem::size_of::<Node>();

pub(crate) struct Node {
    pub(crate) wrapper_refs: usize,
    pub(crate) referencers: Vec<WeakNodeRef>,
    pub(crate) payload: Payload,
}

pub(crate) enum Payload {
    ConstLeaf {
        bytes: Rc<[u8]>,
        encoding: Encoding,
        length_cache: Cell<Option<usize>>,
    },
    CopyLeaf {
        bytes: Box<[u8]>,
        encoding: Encoding,
        length: usize,
    },
    Substring {
        source: NodeRef,
        start: usize,
        end: usize,
    },
    Concatenation {
        left: NodeRef,
        right: NodeRef,
    },
    Repetition {
        source: NodeRef,
        times: usize,
    },
    /// The materialized ("contented") state every derived kind collapses
    /// into once reconstruction runs — detached from whatever it used to
    /// depend on, holding its own code points.
    Materialized {
        data: Box<[u32]>,
    },
}

impl Drop for Node {
    /// By the time this runs, `self`'s strong count has already reached
    /// zero, which (since every referencer holds a strong `Rc` to what it
    /// depends on) can only be true if nothing still depends on `self` —
    /// so there is nothing left to tell. What *is* left to do is release
    /// our own strong references to whatever we ourselves depended on,
    /// running the same cost check against them a sibling referencer's
    /// explicit detach would.
    fn drop(&mut self) {
        match &self.payload {
            Payload::Substring { source, .. } | Payload::Repetition { source, .. } => {
                release_dependency(source);
            }
            Payload::Concatenation { left, right } => {
                release_dependency(left);
                release_dependency(right);
            }
            _ => {}
        }
    }
}

fn new_node(payload: Payload) -> NodeRef {
    Rc::new(std::cell::RefCell::new(Node {
        wrapper_refs: 0,
        referencers: Vec::new(),
        payload,
    }))
}

pub(crate) fn empty() -> NodeRef {
    leaf::new_copy(&[], Encoding::Ascii)
}

/// Registers `referencer` as something that must be told to reconstruct
/// before `source` is retired.
fn add_referencer(source: &NodeRef, referencer: &NodeRef) {
    source.borrow_mut().referencers.push(Rc::downgrade(referencer));
}

/// Drops every referencer entry on `source` whose target no longer exists.
/// Used when a dependent node is itself being torn down: by the time this
/// runs its own `Weak` entry no longer upgrades, so this both removes that
/// entry and sweeps any other already-stale ones.
fn prune_dead_referencers(source: &NodeRef) {
    source.borrow_mut().referencers.retain(|w| w.upgrade().is_some());
}

/// Removes exactly the entry pointing at `referencer`, used when a node
/// detaches from its source *while still alive* (explicit reconstruction).
fn remove_referencer(source: &NodeRef, referencer: &NodeRef) {
    let weak = Rc::downgrade(referencer);
    source
        .borrow_mut()
        .referencers
        .retain(|w| !Weak::ptr_eq(w, &weak));
}

pub(crate) fn wrapper_ref_add(node: &NodeRef) {
    node.borrow_mut().wrapper_refs += 1;
}

/// Decrements the wrapper count and, if it reached zero and the numbers
/// favor it, forces every remaining referencer of `node` to materialize.
/// This is the single trigger point mirroring the original's
/// `refRelease() == 0 && freeingCost() < keepingCost()` check — called
/// both when a [`crate::Cord`] gives up its handle and, recursively, when
/// a node releases its own strong references to what it depends on.
pub(crate) fn release_handle(node: &NodeRef) {
    {
        let mut n = node.borrow_mut();
        n.wrapper_refs = n.wrapper_refs.saturating_sub(1);
    }
    maybe_retire(node);
}

/// The `Cord::replace` analogue of [`release_handle`]: releases the
/// wrapper handle and, once it reaches zero, forces reconstruction of
/// whatever still depends on `node` unconditionally — no cost comparison.
/// Mirrors the original's `operator=`, which never applied the check its
/// destructor does.
pub(crate) fn release_handle_unconditional(node: &NodeRef) {
    let reached_zero = {
        let mut n = node.borrow_mut();
        n.wrapper_refs = n.wrapper_refs.saturating_sub(1);
        n.wrapper_refs == 0
    };
    if reached_zero {
        reconstruct_referencers(node);
    }
}

fn maybe_retire(node: &NodeRef) {
    if node.borrow().wrapper_refs != 0 {
        return;
    }
    let fc = freeing_cost(node);
    let kc = keeping_cost(node);
    if fc < kc {
        log::debug!(
            "retiring node: freeing cost {} < keeping cost {}, forcing {} referencer(s) to reconstruct",
            fc,
            kc,
            node.borrow().referencers.len()
        );
        reconstruct_referencers(node);
    }
}

/// Forces every currently-alive referencer of `node` to materialize.
fn reconstruct_referencers(node: &NodeRef) {
    let referencers = std::mem::take(&mut node.borrow_mut().referencers);
    for weak in referencers {
        if let Some(referencer) = weak.upgrade() {
            reconstruct(&referencer);
        }
    }
}

/// Called when a node releases a strong reference to something it depends
/// on (its own teardown, or an explicit `reconstruct`). Prunes the stale
/// back-reference and, if nothing directly names `dependency` anymore,
/// runs the same cost check `release_handle` runs for a [`crate::Cord`].
fn release_dependency(dependency: &NodeRef) {
    prune_dead_referencers(dependency);
    maybe_retire(dependency);
}

/// Sum of the reconstruction cost of every node that still depends on
/// `node` — "what would it cost everyone if this went away right now".
fn freeing_cost(node: &NodeRef) -> usize {
    node.borrow()
        .referencers
        .iter()
        .filter_map(Weak::upgrade)
        .map(|r| reconstruction_cost(&r))
        .sum()
}

pub(crate) fn keeping_cost(node: &NodeRef) -> usize {
    let n = node.borrow();
    match &n.payload {
        Payload::ConstLeaf { .. } => NODE_OVERHEAD,
        Payload::CopyLeaf { bytes, .. } => NODE_OVERHEAD + bytes.len(),
        Payload::Substring { source, .. } => NODE_OVERHEAD + keeping_cost(source),
        Payload::Concatenation { left, right } => {
            NODE_OVERHEAD + keeping_cost(left) + keeping_cost(right)
        }
        Payload::Repetition { source, .. } => NODE_OVERHEAD + keeping_cost(source),
        Payload::Materialized { data } => NODE_OVERHEAD + data.len() * std::mem::size_of::<u32>(),
    }
}

/// Cost of forcing *this* node specifically to materialize. Zero once a
/// node is already materialized — there's nothing left to reconstruct.
fn reconstruction_cost(node: &NodeRef) -> usize {
    let n = node.borrow();
    match &n.payload {
        Payload::Substring { start, end, .. } => {
            NODE_OVERHEAD + (end - start) * std::mem::size_of::<u32>()
        }
        Payload::Concatenation { left, right } => {
            NODE_OVERHEAD + (length(left) + length(right)) * 2
        }
        Payload::Repetition { source, times } => NODE_OVERHEAD + length(source) * times * 2,
        _ => 0,
    }
}

/// Materializes a lazy derived node into its owned `Materialized` buffer,
/// detaching it from whatever it depended on. Implemented for all three
/// derived kinds (the original left two of these as empty stubs).
fn reconstruct(node: &NodeRef) {
    if matches!(node.borrow().payload, Payload::Materialized { .. }) {
        return;
    }
    let data: Box<[u32]> = {
        let n = node.borrow();
        match &n.payload {
            Payload::Substring { source, start, end } => {
                (*start..*end)
                    .map(|i| code_unit_at(source, i).unwrap_or(0))
                    .collect()
            }
            Payload::Concatenation { left, right } => {
                let ll = length(left);
                let rl = length(right);
                (0..ll)
                    .map(|i| code_unit_at(left, i).unwrap_or(0))
                    .chain((0..rl).map(|i| code_unit_at(right, i).unwrap_or(0)))
                    .collect()
            }
            Payload::Repetition { source, times } => {
                let sl = length(source);
                (0..sl * *times)
                    .map(|i| code_unit_at(source, i % sl.max(1)).unwrap_or(0))
                    .collect()
            }
            _ => return,
        }
    };
    log::trace!("reconstructed node into {} materialized code points", data.len());
    let dependencies: Vec<NodeRef> = {
        let n = node.borrow();
        match &n.payload {
            Payload::Substring { source, .. } | Payload::Repetition { source, .. } => {
                vec![source.clone()]
            }
            Payload::Concatenation { left, right } => vec![left.clone(), right.clone()],
            _ => vec![],
        }
    };
    node.borrow_mut().payload = Payload::Materialized { data };
    for dependency in &dependencies {
        remove_referencer(dependency, node);
        release_dependency(dependency);
    }
}

pub(crate) fn length(node: &NodeRef) -> usize {
    let n = node.borrow();
    match &n.payload {
        Payload::ConstLeaf {
            bytes,
            encoding,
            length_cache,
        } => {
            if let Some(cached) = length_cache.get() {
                return cached;
            }
            let computed = leaf::length(bytes, *encoding).unwrap_or(0);
            length_cache.set(Some(computed));
            computed
        }
        Payload::CopyLeaf { length, .. } => *length,
        Payload::Substring { start, end, .. } => end - start,
        Payload::Concatenation { left, right } => length(left) + length(right),
        Payload::Repetition { source, times } => length(source) * times,
        Payload::Materialized { data } => data.len(),
    }
}

/// Dispatches straight to the owning leaf's codec instead of gating on
/// `length(node)` first: a leaf's cached length collapses to 0 for
/// invalid-UTF-8 bytes (see `leaf::length`'s `unwrap_or(0)`), so checking
/// it here would turn every index into a spurious `RangeError` and make
/// `Error::InvalidByteSequence` unreachable. Each codec's own
/// `code_unit_at` already walks its bytes and reports `RangeError` or
/// `InvalidByteSequence` correctly — a leading valid byte decodes fine
/// even if a later byte in the same leaf is malformed.
pub(crate) fn code_unit_at(node: &NodeRef, index: usize) -> Result<u32> {
    let n = node.borrow();
    match &n.payload {
        Payload::ConstLeaf { bytes, encoding, .. } => leaf::code_unit_at(bytes, *encoding, index),
        Payload::CopyLeaf { bytes, encoding, .. } => leaf::code_unit_at(bytes, *encoding, index),
        Payload::Substring { source, start, end } => {
            if index >= end - start {
                return Err(Error::RangeError);
            }
            let source = source.clone();
            let target = start + index;
            drop(n);
            code_unit_at(&source, target)
        }
        Payload::Concatenation { left, right } => {
            let left = left.clone();
            let right = right.clone();
            drop(n);
            let left_len = length(&left);
            if index < left_len {
                code_unit_at(&left, index)
            } else {
                code_unit_at(&right, index - left_len)
            }
        }
        Payload::Repetition { source, times } => {
            if index >= length(source) * *times {
                return Err(Error::RangeError);
            }
            let source = source.clone();
            drop(n);
            let unit_len = length(&source);
            code_unit_at(&source, index % unit_len)
        }
        Payload::Materialized { data } => data.get(index).copied().ok_or(Error::RangeError),
    }
}

pub(crate) fn substring(node: &NodeRef, start: usize, end: usize) -> Result<NodeRef> {
    let len = length(node);
    if start > len || end > len || start > end {
        return Err(Error::RangeError);
    }
    // Collapse a substring-of-a-substring into one hop against the
    // original source, same as the original's `SubstringSequence::substring`.
    let collapsed = {
        let n = node.borrow();
        match &n.payload {
            Payload::Substring {
                source,
                start: base_start,
                ..
            } => Some((source.clone(), base_start + start, base_start + end)),
            _ => None,
        }
    };
    let result = substring::new(
        collapsed
            .as_ref()
            .map(|(source, _, _)| source)
            .unwrap_or(node),
        collapsed.as_ref().map(|(_, s, _)| *s).unwrap_or(start),
        collapsed.as_ref().map(|(_, _, e)| *e).unwrap_or(end),
    );
    Ok(result)
}

pub(crate) fn print<W: std::io::Write>(node: &NodeRef, sink: &mut W) -> std::io::Result<()> {
    let n = node.borrow();
    match &n.payload {
        Payload::ConstLeaf { bytes, encoding, .. } => leaf::print(sink, bytes, *encoding),
        Payload::CopyLeaf { bytes, encoding, .. } => leaf::print(sink, bytes, *encoding),
        _ => {
            drop(n);
            print_range(node, sink, 0, length(node))
                .map_err(|_| std::io::ErrorKind::InvalidData.into())
        }
    }
}

pub(crate) fn print_range<W: std::io::Write>(
    node: &NodeRef,
    sink: &mut W,
    start: usize,
    end: usize,
) -> Result<()> {
    let len = length(node);
    if start > len || end > len || start > end {
        return Err(Error::RangeError);
    }
    let n = node.borrow();
    match &n.payload {
        Payload::ConstLeaf { bytes, encoding, .. } => {
            leaf::print_range(sink, bytes, *encoding, start, end)
        }
        Payload::CopyLeaf { bytes, encoding, .. } => {
            leaf::print_range(sink, bytes, *encoding, start, end)
        }
        Payload::Substring {
            source,
            start: base,
            ..
        } => {
            let source = source.clone();
            let base = *base;
            drop(n);
            print_range(&source, sink, base + start, base + end)
        }
        Payload::Concatenation { left, right } => {
            let left = left.clone();
            let right = right.clone();
            drop(n);
            concatenation::print_range(&left, &right, sink, start, end)
        }
        Payload::Repetition { source, .. } => {
            let source = source.clone();
            drop(n);
            repetition::print_range(&source, sink, start, end)
        }
        Payload::Materialized { data } => {
            for &code_point in &data[start..end] {
                let (buf, n) = codec::utf8::encode(code_point);
                sink.write_all(&buf[..n]).map_err(|_| Error::Unexpected)?;
            }
            Ok(())
        }
    }
}

pub(crate) fn trim(node: &NodeRef) -> Result<NodeRef> {
    let (start, end) = trim_indexes(node)?;
    substring(node, start, end)
}

pub(crate) fn trim_left(node: &NodeRef) -> Result<NodeRef> {
    let (start, _) = trim_indexes(node)?;
    substring(node, start, length(node))
}

pub(crate) fn trim_right(node: &NodeRef) -> Result<NodeRef> {
    let (_, end) = trim_indexes(node)?;
    substring(node, 0, end)
}

/// Leaves trim directly off their bytes via [`leaf::trim_indexes`];
/// derived nodes fall back to walking `code_unit_at` from each end,
/// exactly as the original's derived-node `trim` bodies do.
fn trim_indexes(node: &NodeRef) -> Result<(usize, usize)> {
    let fast = {
        let n = node.borrow();
        match &n.payload {
            Payload::ConstLeaf { bytes, encoding, .. } => {
                Some(leaf::trim_indexes(bytes, *encoding))
            }
            Payload::CopyLeaf { bytes, encoding, .. } => Some(leaf::trim_indexes(bytes, *encoding)),
            _ => None,
        }
    };
    if let Some(result) = fast {
        return result;
    }
    let len = length(node);
    let mut start = 0;
    while start < len && codec::is_whitespace(code_unit_at(node, start)?) {
        start += 1;
    }
    if start == len {
        return Ok((start, start));
    }
    let mut end = len;
    while end > 0 && codec::is_whitespace(code_unit_at(node, end - 1)?) {
        end -= 1;
    }
    Ok((start, end))
}

pub(crate) fn compare(a: &NodeRef, b: &NodeRef) -> std::cmp::Ordering {
    let a_len = length(a);
    let b_len = length(b);
    let common = a_len.min(b_len);
    for i in 0..common {
        let (x, y) = (code_unit_at(a, i).unwrap_or(0), code_unit_at(b, i).unwrap_or(0));
        match x.cmp(&y) {
            std::cmp::Ordering::Equal => continue,
            other => return other,
        }
    }
    a_len.cmp(&b_len)
}

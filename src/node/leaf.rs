//! Leaf storage: the two ways a node can own its bytes.
//!
//! `Const` leaves share a reference-counted buffer (`Rc<[u8]>`) — cheap to
//! construct, but nothing is copied, so every clone of a [`crate::Cord`]
//! pointing at one keeps the *whole* original buffer alive via the strong
//! count, regardless of how small a substring into it ends up being.
//! `Copy` leaves allocate their own private `Box<[u8]>` up front, trading
//! an eager copy for a buffer nothing else can pin.

use std::cell::Cell;
use std::rc::Rc;

use super::{new_node, NodeRef, Payload};
use crate::codec::{ascii, utf16be, utf32, utf8};
use crate::error::Result;
use crate::Encoding;

pub(crate) fn new_const(bytes: Rc<[u8]>, encoding: Encoding) -> NodeRef {
    new_node(Payload::ConstLeaf {
        bytes,
        encoding,
        length_cache: Cell::new(None),
    })
}

pub(crate) fn new_copy(bytes: &[u8], encoding: Encoding) -> NodeRef {
    let length = length(bytes, encoding).unwrap_or(0);
    new_node(Payload::CopyLeaf {
        bytes: bytes.into(),
        encoding,
        length,
    })
}

pub(crate) fn length(bytes: &[u8], encoding: Encoding) -> Result<usize> {
    Ok(match encoding {
        Encoding::Ascii => ascii::length(bytes),
        Encoding::Utf8 => utf8::length(bytes)?,
        Encoding::Utf16Be => utf16be::length(bytes),
        Encoding::Utf32 => utf32::length(bytes),
    })
}

pub(crate) fn code_unit_at(bytes: &[u8], encoding: Encoding, index: usize) -> Result<u32> {
    match encoding {
        Encoding::Ascii => ascii::code_unit_at(bytes, index),
        Encoding::Utf8 => utf8::code_unit_at(bytes, index),
        Encoding::Utf16Be => utf16be::code_unit_at(bytes, index),
        Encoding::Utf32 => utf32::code_unit_at(bytes, index),
    }
}

pub(crate) fn print_range<W: std::io::Write>(
    sink: &mut W,
    bytes: &[u8],
    encoding: Encoding,
    start: usize,
    end: usize,
) -> Result<()> {
    match encoding {
        Encoding::Ascii => ascii::print_range(sink, bytes, start, end),
        Encoding::Utf8 => utf8::print_range(sink, bytes, start, end),
        Encoding::Utf16Be => utf16be::print_range(sink, bytes, start, end),
        Encoding::Utf32 => utf32::print_range(sink, bytes, start, end),
    }
}

/// Fast path for printing a whole leaf, used instead of `print_range(..,
/// 0, length)` so a leaf doesn't pay for a length computation it doesn't
/// need.
pub(crate) fn print<W: std::io::Write>(
    sink: &mut W,
    bytes: &[u8],
    encoding: Encoding,
) -> std::io::Result<()> {
    match encoding {
        Encoding::Ascii => ascii::print(sink, bytes),
        Encoding::Utf8 => utf8::print(sink, bytes),
        Encoding::Utf16Be => utf16be::print(sink, bytes, utf16be::length(bytes)),
        Encoding::Utf32 => utf32::print(sink, bytes),
    }
}

/// Fast path for trimming a leaf directly off its bytes, bypassing the
/// generic `code_unit_at` walk derived nodes use.
pub(crate) fn trim_indexes(bytes: &[u8], encoding: Encoding) -> Result<(usize, usize)> {
    match encoding {
        Encoding::Ascii => Ok(ascii::trim(bytes)),
        Encoding::Utf8 => utf8::trim(bytes),
        Encoding::Utf16Be => utf16be::trim(bytes, utf16be::length(bytes)),
        Encoding::Utf32 => Ok(utf32::trim(bytes)),
    }
}

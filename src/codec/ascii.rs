//! ASCII codec: one byte, one code point, fixed width.

use crate::error::{Error, Result};

use super::is_whitespace;

/// Number of code points in `bytes` (trivially `bytes.len()` — every byte
/// is one code point).
pub fn length(bytes: &[u8]) -> usize {
    bytes.len()
}

pub fn code_unit_at(bytes: &[u8], index: usize) -> Result<u32> {
    bytes
        .get(index)
        .map(|&b| b as u32)
        .ok_or(Error::RangeError)
}

pub fn print<W: std::io::Write>(sink: &mut W, bytes: &[u8]) -> std::io::Result<()> {
    sink.write_all(bytes)
}

pub fn print_range<W: std::io::Write>(
    sink: &mut W,
    bytes: &[u8],
    start: usize,
    end: usize,
) -> Result<()> {
    let slice = bytes.get(start..end).ok_or(Error::RangeError)?;
    sink.write_all(slice).map_err(|_| Error::Unexpected)
}

/// Trims both ends in a single pass, fixed-width so index arithmetic is
/// direct — no `code_unit_at` walking needed.
///
/// A slice that is entirely whitespace collapses to the empty interval
/// `(start, start)` rather than the inverted `(len, 0)` a naive
/// left-scan/right-scan composition would produce.
pub fn trim(bytes: &[u8]) -> (usize, usize) {
    let start = trim_left(bytes);
    if start == bytes.len() {
        return (start, start);
    }
    (start, trim_right(bytes))
}

pub fn trim_left(bytes: &[u8]) -> usize {
    let mut start = 0;
    while start < bytes.len() && is_whitespace(bytes[start] as u32) {
        start += 1;
    }
    start
}

pub fn trim_right(bytes: &[u8]) -> usize {
    let mut end = bytes.len();
    while end > 0 && is_whitespace(bytes[end - 1] as u32) {
        end -= 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_bytes() {
        assert_eq!(length(b"hello"), 5);
        assert_eq!(length(b""), 0);
    }

    #[test]
    fn code_unit_at_range_checks() {
        assert_eq!(code_unit_at(b"hi", 0).unwrap(), b'h' as u32);
        assert!(code_unit_at(b"hi", 2).is_err());
    }

    #[test]
    fn trim_strips_both_ends() {
        let (s, e) = trim(b"  hi  ");
        assert_eq!((s, e), (2, 4));
    }

    #[test]
    fn trim_all_whitespace_collapses() {
        let (s, e) = trim(b"   ");
        assert_eq!(s, e);
    }
}

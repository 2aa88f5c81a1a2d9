//! UTF-8 codec: variable width, self-synchronizing lead bytes.

use crate::error::{Error, Result};

use super::is_whitespace;

fn lead_width(byte: u8) -> Result<usize> {
    if byte & 0xf8 == 0xf0 {
        Ok(4)
    } else if byte & 0xf0 == 0xe0 {
        Ok(3)
    } else if byte & 0xe0 == 0xc0 {
        Ok(2)
    } else if byte & 0x80 == 0x00 {
        Ok(1)
    } else {
        Err(Error::InvalidByteSequence)
    }
}

/// Number of code points encoded in `bytes`.
pub fn length(bytes: &[u8]) -> Result<usize> {
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        i += lead_width(bytes[i])?;
        count += 1;
    }
    Ok(count)
}

pub fn code_unit_at(bytes: &[u8], index: usize) -> Result<u32> {
    let mut i = 0;
    let mut unit = 0;
    while i < bytes.len() {
        let width = lead_width(bytes[i])?;
        let mut code_point = match width {
            1 => bytes[i] as u32,
            2 => (bytes[i] & 0x1f) as u32,
            3 => (bytes[i] & 0x0f) as u32,
            4 => (bytes[i] & 0x07) as u32,
            _ => unreachable!(),
        };
        for k in 1..width {
            code_point = (code_point << 6) | (bytes[i + k] & 0x3f) as u32;
        }
        if unit == index {
            return Ok(code_point);
        }
        i += width;
        unit += 1;
    }
    Err(Error::RangeError)
}

pub fn print<W: std::io::Write>(sink: &mut W, bytes: &[u8]) -> std::io::Result<()> {
    sink.write_all(bytes)
}

/// Maps a `[start, end)` code-point interval to the byte offsets it spans.
pub fn range_indexes(bytes: &[u8], start: usize, end: usize) -> Result<(usize, usize)> {
    let mut i = 0;
    let mut unit = 0;
    let mut start_offset = None;
    let mut end_offset = None;
    while i < bytes.len() {
        if start_offset.is_none() {
            if unit == start {
                start_offset = Some(i);
            }
        } else if unit == end {
            end_offset = Some(i);
            break;
        }
        i += lead_width(bytes[i])?;
        unit += 1;
    }
    if end_offset.is_none() && unit == end {
        end_offset = Some(i);
    }
    match (start_offset, end_offset) {
        (Some(s), Some(e)) => Ok((s, e)),
        _ => Err(Error::RangeError),
    }
}

pub fn print_range<W: std::io::Write>(
    sink: &mut W,
    bytes: &[u8],
    start: usize,
    end: usize,
) -> Result<()> {
    let (s, e) = range_indexes(bytes, start, end)?;
    sink.write_all(&bytes[s..e]).map_err(|_| Error::Unexpected)
}

/// Encodes a single code point to UTF-8. Also used by the UTF-16BE and
/// UTF-32 codecs to render their internal code points to a byte sink,
/// since every print target in this crate is UTF-8.
pub fn encode(code_point: u32) -> ([u8; 4], usize) {
    let mut out = [0u8; 4];
    if code_point < 0x80 {
        out[0] = code_point as u8;
        (out, 1)
    } else if code_point < 0x800 {
        out[0] = 0xc0 | (code_point >> 6) as u8;
        out[1] = 0x80 | (code_point & 0x3f) as u8;
        (out, 2)
    } else if code_point < 0x10000 {
        out[0] = 0xe0 | (code_point >> 12) as u8;
        out[1] = 0x80 | ((code_point >> 6) & 0x3f) as u8;
        out[2] = 0x80 | (code_point & 0x3f) as u8;
        (out, 3)
    } else {
        out[0] = 0xf0 | (code_point >> 18) as u8;
        out[1] = 0x80 | ((code_point >> 12) & 0x3f) as u8;
        out[2] = 0x80 | ((code_point >> 6) & 0x3f) as u8;
        out[3] = 0x80 | (code_point & 0x3f) as u8;
        (out, 4)
    }
}

/// Generic walking trim for a variable-width encoding: repeatedly probes
/// `code_unit_at` from each end rather than doing fixed-width arithmetic.
pub fn trim(bytes: &[u8]) -> Result<(usize, usize)> {
    let len = length(bytes)?;
    let start = trim_left_index(bytes, len)?;
    if start == len {
        return Ok((start, start));
    }
    let end = trim_right_index(bytes, len)?;
    Ok((start, end))
}

pub fn trim_left(bytes: &[u8]) -> Result<usize> {
    let len = length(bytes)?;
    trim_left_index(bytes, len)
}

pub fn trim_right(bytes: &[u8]) -> Result<usize> {
    let len = length(bytes)?;
    trim_right_index(bytes, len)
}

fn trim_left_index(bytes: &[u8], len: usize) -> Result<usize> {
    let mut start = 0;
    while start < len && is_whitespace(code_unit_at(bytes, start)?) {
        start += 1;
    }
    Ok(start)
}

fn trim_right_index(bytes: &[u8], len: usize) -> Result<usize> {
    let mut end = len;
    while end > 0 && is_whitespace(code_unit_at(bytes, end - 1)?) {
        end -= 1;
    }
    Ok(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_subset_round_trips() {
        let bytes = "hi".as_bytes();
        assert_eq!(length(bytes).unwrap(), 2);
        assert_eq!(code_unit_at(bytes, 0).unwrap(), 'h' as u32);
    }

    #[test]
    fn multibyte_length_and_index() {
        let bytes = "h\u{e9}llo".as_bytes(); // h, e-acute, l, l, o
        assert_eq!(length(bytes).unwrap(), 5);
        assert_eq!(code_unit_at(bytes, 1).unwrap(), 0xe9);
    }

    #[test]
    fn range_indexes_spans_multibyte() {
        let bytes = "a\u{1f600}b".as_bytes(); // a, emoji (4 bytes), b
        let (s, e) = range_indexes(bytes, 1, 2).unwrap();
        assert_eq!(&bytes[s..e], "\u{1f600}".as_bytes());
    }

    #[test]
    fn encode_round_trips_through_decode() {
        for cp in [0x41u32, 0x3b1, 0x1f600, 0xe9] {
            let (buf, n) = encode(cp);
            assert_eq!(code_unit_at(&buf[..n], 0).unwrap(), cp);
        }
    }

    #[test]
    fn invalid_lead_byte_errors() {
        assert!(length(&[0xff]).is_err());
    }
}

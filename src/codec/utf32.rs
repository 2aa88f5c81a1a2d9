//! UTF-32 codec: fixed width, native-endian code units.

use crate::error::{Error, Result};

use super::is_whitespace;

const UNIT: usize = 4;

fn load(bytes: &[u8], index: usize) -> u32 {
    let offset = index * UNIT;
    u32::from_ne_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

pub fn length(bytes: &[u8]) -> usize {
    bytes.len() / UNIT
}

pub fn code_unit_at(bytes: &[u8], index: usize) -> Result<u32> {
    if index >= length(bytes) {
        return Err(Error::RangeError);
    }
    Ok(load(bytes, index))
}

pub fn print<W: std::io::Write>(sink: &mut W, bytes: &[u8]) -> std::io::Result<()> {
    for i in 0..length(bytes) {
        let (buf, n) = super::utf8::encode(load(bytes, i));
        sink.write_all(&buf[..n])?;
    }
    Ok(())
}

pub fn print_range<W: std::io::Write>(
    sink: &mut W,
    bytes: &[u8],
    start: usize,
    end: usize,
) -> Result<()> {
    if end > length(bytes) || start > end {
        return Err(Error::RangeError);
    }
    for i in start..end {
        let (buf, n) = super::utf8::encode(load(bytes, i));
        sink.write_all(&buf[..n]).map_err(|_| Error::Unexpected)?;
    }
    Ok(())
}

pub fn trim(bytes: &[u8]) -> (usize, usize) {
    let len = length(bytes);
    let start = trim_left(bytes);
    if start == len {
        return (start, start);
    }
    (start, trim_right(bytes, len))
}

pub fn trim_left(bytes: &[u8]) -> usize {
    let len = length(bytes);
    let mut start = 0;
    while start < len && is_whitespace(load(bytes, start)) {
        start += 1;
    }
    start
}

pub fn trim_right(bytes: &[u8], len: usize) -> usize {
    let mut end = len;
    while end > 0 && is_whitespace(load(bytes, end - 1)) {
        end -= 1;
    }
    end
}

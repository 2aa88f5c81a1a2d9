//! UTF-16BE codec. Surrogate pairs are detected the same way the original
//! does — checking only the high byte of the first unit against `0xd8` —
//! and decoded with a formula that does not match the standard UTF-16
//! surrogate-pair algorithm. This is a known, deliberately preserved
//! discrepancy: see the crate-level notes on `Encoding::Utf16Be`.

use crate::error::{Error, Result};

use super::is_whitespace;

fn unit_width(bytes: &[u8], offset: usize) -> usize {
    if bytes[offset] & 0xfc == 0xd8 {
        4
    } else {
        2
    }
}

pub fn length(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i + 1 < bytes.len() {
        let width = unit_width(bytes, i);
        if i + width > bytes.len() {
            break;
        }
        i += width;
        count += 1;
    }
    count
}

/// Non-standard surrogate decode: combines four bytes starting at a unit
/// whose high byte matches `0xd8` using bit positions that do not
/// reconstruct the code point the standard UTF-16 algorithm would.
fn decode_at(bytes: &[u8], offset: usize) -> u32 {
    if bytes[offset] & 0xfc == 0xd8 {
        let b0 = bytes[offset] as u32;
        let b1 = bytes[offset + 1] as u32;
        let b2 = bytes[offset + 2] as u32;
        let b3 = bytes[offset + 3] as u32;
        ((b0 & 0x03) << 18) + (b1 << 10) + ((b2 & 0x03) << 8) + b3
    } else {
        ((bytes[offset] as u32) << 8) + bytes[offset + 1] as u32
    }
}

pub fn code_unit_at(bytes: &[u8], index: usize) -> Result<u32> {
    let mut i = 0;
    let mut unit = 0;
    while i + 1 < bytes.len() {
        let width = unit_width(bytes, i);
        if i + width > bytes.len() {
            break;
        }
        if unit == index {
            return Ok(decode_at(bytes, i));
        }
        i += width;
        unit += 1;
    }
    Err(Error::RangeError)
}

pub fn print<W: std::io::Write>(sink: &mut W, bytes: &[u8], length: usize) -> std::io::Result<()> {
    print_range(sink, bytes, 0, length).map_err(|_| std::io::ErrorKind::InvalidData.into())
}

pub fn print_range<W: std::io::Write>(
    sink: &mut W,
    bytes: &[u8],
    start: usize,
    end: usize,
) -> Result<()> {
    let mut i = 0;
    let mut unit = 0;
    while i + 1 < bytes.len() && unit < end {
        let width = unit_width(bytes, i);
        if i + width > bytes.len() {
            break;
        }
        if unit >= start {
            let code_point = decode_at(bytes, i);
            let (buf, n) = super::utf8::encode(code_point);
            sink.write_all(&buf[..n]).map_err(|_| Error::Unexpected)?;
        }
        i += width;
        unit += 1;
    }
    Ok(())
}

pub fn trim(bytes: &[u8], len: usize) -> Result<(usize, usize)> {
    let start = trim_left(bytes)?;
    if start == len {
        return Ok((start, start));
    }
    Ok((start, trim_right(bytes, len)?))
}

pub fn trim_left(bytes: &[u8]) -> Result<usize> {
    let len = length(bytes);
    let mut start = 0;
    while start < len && is_whitespace(code_unit_at(bytes, start)?) {
        start += 1;
    }
    Ok(start)
}

pub fn trim_right(bytes: &[u8], len: usize) -> Result<usize> {
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
    fn bmp_round_trip() {
        let mut bytes = Vec::new();
        for unit in [0x0041u16, 0x00e9] {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        assert_eq!(length(&bytes), 2);
        assert_eq!(code_unit_at(&bytes, 0).unwrap(), 0x41);
        assert_eq!(code_unit_at(&bytes, 1).unwrap(), 0xe9);
    }

    #[test]
    fn surrogate_like_unit_consumes_four_bytes() {
        let bytes = [0xd8u8, 0x00, 0xdc, 0x00];
        assert_eq!(length(&bytes), 1);
        // documents the non-standard decode, not the Unicode-correct value
        let decoded = code_unit_at(&bytes, 0).unwrap();
        assert_eq!(decoded, decode_at(&bytes, 0));
    }

    #[test]
    fn print_emits_utf8() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0x0041u16.to_be_bytes());
        let mut out = Vec::new();
        print(&mut out, &bytes, 1).unwrap();
        assert_eq!(out, b"A");
    }
}

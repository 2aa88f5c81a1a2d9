//! Empty strings, zero/one repetition, whitespace at both ends, and
//! UTF-16BE surrogate-like sequences sitting at a string boundary.

use ropestr::{Cord, Encoding};

#[test]
fn empty_string_trim_and_substring() {
    let empty = Cord::empty();
    assert_eq!(empty.length(), 0);
    assert!(empty.is_empty());
    assert_eq!(empty.trim().length(), 0);
    assert_eq!(empty.substring(0, 0).unwrap().length(), 0);
}

#[test]
fn concat_with_empty_is_identity() {
    let a = Cord::from_copy(b"hello", Encoding::Ascii);
    let empty = Cord::empty();
    let left = &empty + &a;
    let right = &a + &empty;
    assert_eq!(left.length(), a.length());
    assert_eq!(right.length(), a.length());

    let mut buf = Vec::new();
    left.print(&mut buf).unwrap();
    assert_eq!(buf, b"hello");
}

#[test]
fn repetition_by_zero_is_empty() {
    let a = Cord::from_copy(b"hello", Encoding::Ascii);
    let none = &a * 0;
    assert_eq!(none.length(), 0);
}

#[test]
fn repetition_by_one_is_identity() {
    let a = Cord::from_copy(b"hello", Encoding::Ascii);
    let once = &a * 1;
    assert_eq!(once.length(), a.length());
    let mut buf = Vec::new();
    once.print(&mut buf).unwrap();
    assert_eq!(buf, b"hello");
}

#[test]
fn mixed_single_and_multibyte_utf8_with_surrounding_whitespace() {
    let c = Cord::from_copy("  a\u{e9}b\u{1f600}c  ".as_bytes(), Encoding::Utf8);
    let trimmed = c.trim();
    assert_eq!(trimmed.length(), 5); // a, e-acute, b, emoji, c
    let mut buf = Vec::new();
    trimmed.print(&mut buf).unwrap();
    assert_eq!(buf, "a\u{e9}b\u{1f600}c".as_bytes());
}

#[test]
fn utf16be_surrogate_like_unit_at_string_boundary() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0x0041u16.to_be_bytes()); // 'A'
    bytes.extend_from_slice(&[0xd8, 0x00, 0xdc, 0x00]); // surrogate-like unit
    let c = Cord::from_copy(&bytes, Encoding::Utf16Be);
    assert_eq!(c.length(), 2);
    // Non-standard decode formula (documented, preserved deliberately):
    // confirm the boundary unit still decodes to *something* and prints
    // without panicking rather than asserting the Unicode-correct value.
    let mut buf = Vec::new();
    c.print(&mut buf).unwrap();
    assert!(buf.starts_with(b"A"));
}

#[test]
fn all_whitespace_trim_collapses_to_empty() {
    let c = Cord::from_copy(b"     ", Encoding::Ascii);
    let trimmed = c.trim();
    assert_eq!(trimmed.length(), 0);
}

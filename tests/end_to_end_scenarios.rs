//! The six end-to-end walkthroughs: build a cord through the public API,
//! check length/printed content/errors match what the operations compose
//! to.

use ropestr::{Cord, Encoding};

fn printed(c: &Cord) -> String {
    let mut buf = Vec::new();
    c.print(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn trim_of_padded_utf8_string() {
    let c = Cord::from_copy("  hello  ".as_bytes(), Encoding::Utf8);
    let trimmed = c.trim();
    assert_eq!(trimmed.length(), 5);
    assert_eq!(printed(&trimmed), "hello");
}

#[test]
fn concatenation_of_ascii_consts() {
    let a = Cord::from_copy(b"abc", Encoding::Ascii);
    let b = Cord::from_copy(b"def", Encoding::Ascii);
    let c = &a + &b;
    assert_eq!(c.length(), 6);
    assert_eq!(c.code_unit_at(3).unwrap(), b'd' as u32);
    assert_eq!(printed(&c), "abcdef");
    let middle = c.substring(1, 5).unwrap();
    assert_eq!(printed(&middle), "bcde");
}

#[test]
fn repetition_of_ascii_const() {
    let a = Cord::from_copy(b"ab", Encoding::Ascii);
    let c = &a * 3;
    assert_eq!(c.length(), 6);
    let middle = c.substring(1, 5).unwrap();
    assert_eq!(printed(&middle), "baba");
    assert_eq!(c.code_unit_at(5).unwrap(), b'b' as u32);
    assert!(c.code_unit_at(6).is_err());
}

#[test]
fn substring_of_multibyte_utf8() {
    let c = Cord::from_copy("héllo".as_bytes(), Encoding::Utf8);
    let piece = c.substring(1, 4).unwrap();
    assert_eq!(piece.length(), 3);
    assert_eq!(piece.code_unit_at(0).unwrap(), 0xe9);
    let mut buf = Vec::new();
    piece.print(&mut buf).unwrap();
    assert_eq!(buf, "éll".as_bytes());
}

#[test]
fn out_of_range_code_unit_at_errors() {
    let c = Cord::from_copy(b"abc", Encoding::Ascii);
    assert!(c.code_unit_at(9).is_err());
}

#[test]
fn dropping_a_large_source_reconstructs_its_surviving_substring() {
    // A big enough buffer that freeing cost (roughly the reconstructed
    // substring's own size) is unambiguously cheaper than keeping the
    // whole thing alive just for this one slice.
    let huge: Vec<u8> = (0..100_000u32).map(|i| (i % 26) as u8 + b'a').collect();
    let big = Cord::from_copy(&huge, Encoding::Utf8);
    let slice = big.substring(1000, 1010).unwrap();
    let expected = printed(&slice);
    drop(big);
    assert_eq!(printed(&slice), expected);
    assert_eq!(slice.length(), 10);
}

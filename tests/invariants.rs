//! The quantified invariants from the testable-properties list: substring,
//! concatenation and repetition index arithmetic, `compare_to`'s ordering
//! properties, and lazy graphs of depth >= 3.

use ropestr::{Cord, Encoding};
use std::cmp::Ordering;

#[test]
fn substring_code_units_match_parent_offset_by_start() {
    let parent = Cord::from_copy(b"abcdefgh", Encoding::Ascii);
    let (s, e) = (2, 6);
    let child = parent.substring(s, e).unwrap();
    for i in 0..(e - s) {
        assert_eq!(
            child.code_unit_at(i).unwrap(),
            parent.code_unit_at(s + i).unwrap()
        );
    }
}

#[test]
fn concatenation_code_units_match_each_side() {
    let left = Cord::from_copy(b"foo", Encoding::Ascii);
    let right = Cord::from_copy(b"barbaz", Encoding::Ascii);
    let whole = &left + &right;
    for i in 0..left.length() {
        assert_eq!(whole.code_unit_at(i).unwrap(), left.code_unit_at(i).unwrap());
    }
    for j in 0..right.length() {
        assert_eq!(
            whole.code_unit_at(left.length() + j).unwrap(),
            right.code_unit_at(j).unwrap()
        );
    }
}

#[test]
fn repetition_code_units_wrap_modulo_source_length() {
    let source = Cord::from_copy(b"xyz", Encoding::Ascii);
    let repeated = &source * 4;
    for i in 0..(source.length() * 4) {
        assert_eq!(
            repeated.code_unit_at(i).unwrap(),
            source.code_unit_at(i % source.length()).unwrap()
        );
    }
}

#[test]
fn substring_length_equals_interval_size() {
    let c = Cord::from_copy(b"0123456789", Encoding::Ascii);
    for s in 0..=c.length() {
        for e in s..=c.length() {
            assert_eq!(c.substring(s, e).unwrap().length(), e - s);
        }
    }
}

#[test]
fn compare_to_is_a_total_order() {
    let a = Cord::from_copy(b"apple", Encoding::Ascii);
    let b = Cord::from_copy(b"banana", Encoding::Ascii);
    let c = Cord::from_copy(b"cherry", Encoding::Ascii);

    assert_eq!(a.compare_to(&a), Ordering::Equal);
    assert_eq!(a.compare_to(&b), Ordering::Less);
    assert_eq!(b.compare_to(&a), Ordering::Greater);

    assert_eq!(a.compare_to(&b), Ordering::Less);
    assert_eq!(b.compare_to(&c), Ordering::Less);
    assert_eq!(a.compare_to(&c), Ordering::Less);

    let a2 = Cord::from_copy(b"apple", Encoding::Ascii);
    assert_eq!(a == a2, a.compare_to(&a2) == Ordering::Equal);
}

#[test]
fn deeply_nested_graph_still_reads_correctly() {
    // Repetition of a Substring, Substring of a Concatenation,
    // Concatenation of Repetitions — graph depth >= 3.
    let base = Cord::from_copy(b"abcdefgh", Encoding::Ascii);
    let sub = base.substring(2, 5).unwrap(); // "cde"
    let rep_of_sub = &sub * 2; // "cdecde"
    assert_eq!(rep_of_sub.length(), 6);
    let mut buf = Vec::new();
    rep_of_sub.print(&mut buf).unwrap();
    assert_eq!(buf, b"cdecde");

    let cat = &base + &sub; // "abcdefgh" + "cde"
    let sub_of_cat = cat.substring(6, 11).unwrap(); // "ghcde"
    let mut buf2 = Vec::new();
    sub_of_cat.print(&mut buf2).unwrap();
    assert_eq!(buf2, b"ghcde");

    let left_rep = &base * 2;
    let right_rep = &sub * 3;
    let cat_of_reps = &left_rep + &right_rep;
    assert_eq!(cat_of_reps.length(), left_rep.length() + right_rep.length());
    let mut buf3 = Vec::new();
    cat_of_reps.print(&mut buf3).unwrap();
    assert_eq!(buf3, b"abcdefghabcdefghcdecdecde");
}

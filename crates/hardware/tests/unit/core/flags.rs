//! # Flags Register Tests
//!
//! `CMP` must set exactly one of the Less/Greater/Equal bits per comparison,
//! with the two relational outcomes mutually exclusive over the same operand
//! order.

use ls8_core::core::Flags;
use rstest::rstest;

#[rstest]
#[case(0, 1)]
#[case(1, 255)]
#[case(100, 101)]
fn test_compare_less(#[case] a: u8, #[case] b: u8) {
    let fl = Flags::compare(a, b);
    assert!(fl.less());
    assert!(!fl.greater());
    assert!(!fl.equal());
}

#[rstest]
#[case(1, 0)]
#[case(255, 1)]
#[case(101, 100)]
fn test_compare_greater(#[case] a: u8, #[case] b: u8) {
    let fl = Flags::compare(a, b);
    assert!(!fl.less());
    assert!(fl.greater());
    assert!(!fl.equal());
}

#[rstest]
#[case(0, 0)]
#[case(42, 42)]
#[case(255, 255)]
fn test_compare_equal(#[case] a: u8, #[case] b: u8) {
    let fl = Flags::compare(a, b);
    assert!(!fl.less());
    assert!(!fl.greater());
    assert!(fl.equal());
}

#[test]
fn test_exactly_one_bit_set_for_all_pairs() {
    for a in 0..=255u8 {
        for b in [0u8, 1, a.wrapping_sub(1), a, a.wrapping_add(1), 255] {
            let bits = Flags::compare(a, b).bits();
            assert_eq!(bits.count_ones(), 1, "a={a} b={b} bits={bits:#05b}");
        }
    }
}

#[test]
fn test_default_flags_hold_no_bits() {
    let fl = Flags::default();
    assert!(!fl.less());
    assert!(!fl.greater());
    assert!(!fl.equal());
    assert_eq!(fl.bits(), 0);
}

#[test]
fn test_flag_encoding_is_lge() {
    assert_eq!(Flags::compare(0, 1).bits(), 0b100);
    assert_eq!(Flags::compare(1, 0).bits(), 0b010);
    assert_eq!(Flags::compare(1, 1).bits(), 0b001);
}

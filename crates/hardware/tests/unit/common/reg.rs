//! # Register File Tests
//!
//! Tests for the LS-8 general-purpose register file.

use ls8_core::VmError;
use ls8_core::common::constants::{SP, SP_INIT};
use ls8_core::common::reg::RegisterFile;
use proptest::prelude::*;

#[test]
fn test_new_initializes_general_registers_to_zero() {
    let regs = RegisterFile::new();
    for i in 0..SP {
        assert_eq!(regs.read(i).ok(), Some(0));
    }
}

#[test]
fn test_new_initializes_stack_pointer_high() {
    let regs = RegisterFile::new();
    assert_eq!(regs.read(SP).ok(), Some(SP_INIT));
    assert_eq!(SP_INIT, 0xF4);
}

#[test]
fn test_read_write_round_trip() {
    let mut regs = RegisterFile::new();
    regs.write(3, 0xAB).expect("valid index");
    assert_eq!(regs.read(3).ok(), Some(0xAB));
}

#[test]
fn test_registers_are_independent() {
    let mut regs = RegisterFile::new();
    regs.write(1, 11).expect("valid index");
    regs.write(2, 22).expect("valid index");
    assert_eq!(regs.read(1).ok(), Some(11));
    assert_eq!(regs.read(2).ok(), Some(22));
}

#[test]
fn test_read_invalid_index_fails() {
    let regs = RegisterFile::new();
    assert!(matches!(regs.read(8), Err(VmError::InvalidRegister(8))));
    assert!(matches!(regs.read(255), Err(VmError::InvalidRegister(255))));
}

#[test]
fn test_write_invalid_index_fails() {
    let mut regs = RegisterFile::new();
    assert!(matches!(
        regs.write(8, 1),
        Err(VmError::InvalidRegister(8))
    ));
}

proptest! {
    /// Wrap law: for every valid index and value in [0, 255], writing and
    /// reading back returns the value unchanged.
    #[test]
    fn test_write_read_wrap_law(idx in 0usize..8, val: u8) {
        let mut regs = RegisterFile::new();
        regs.write(idx, val).expect("valid index");
        prop_assert_eq!(regs.read(idx).ok(), Some(val));
    }

    /// Every out-of-range index is rejected on read and write alike.
    #[test]
    fn test_out_of_range_index_rejected(idx in 8usize..1024, val: u8) {
        let mut regs = RegisterFile::new();
        prop_assert!(regs.read(idx).is_err());
        prop_assert!(regs.write(idx, val).is_err());
    }
}

//! # CPU State Tests
//!
//! Memory bounds, program loading, and state-dump behavior.

use ls8_core::common::constants::{MEMORY_SIZE, SP, SP_INIT};
use ls8_core::{Config, Cpu, LoadError, VmError};

use crate::common::capture_cpu;

#[test]
fn test_new_cpu_starts_at_address_zero_and_running() {
    let (cpu, _) = capture_cpu();
    assert_eq!(cpu.pc, 0);
    assert!(cpu.is_running());
    assert_eq!(cpu.steps(), 0);
}

#[test]
fn test_new_cpu_memory_is_zeroed() {
    let (cpu, _) = capture_cpu();
    for addr in 0..MEMORY_SIZE {
        assert_eq!(cpu.ram_read(addr).ok(), Some(0));
    }
}

#[test]
fn test_ram_write_read_round_trip() {
    let (mut cpu, _) = capture_cpu();
    cpu.ram_write(0x10, 0xAB).expect("valid address");
    assert_eq!(cpu.ram_read(0x10).ok(), Some(0xAB));
}

#[test]
fn test_ram_access_last_cell() {
    let (mut cpu, _) = capture_cpu();
    cpu.ram_write(MEMORY_SIZE - 1, 0xFF).expect("valid address");
    assert_eq!(cpu.ram_read(MEMORY_SIZE - 1).ok(), Some(0xFF));
}

#[test]
fn test_ram_read_out_of_range_fails() {
    let (cpu, _) = capture_cpu();
    assert!(matches!(
        cpu.ram_read(MEMORY_SIZE),
        Err(VmError::OutOfRange(a)) if a == MEMORY_SIZE
    ));
}

#[test]
fn test_ram_write_out_of_range_fails() {
    let (mut cpu, _) = capture_cpu();
    assert!(matches!(
        cpu.ram_write(1000, 1),
        Err(VmError::OutOfRange(1000))
    ));
}

#[test]
fn test_load_program_copies_image_from_address_zero() {
    let (mut cpu, _) = capture_cpu();
    cpu.load_program(&[0x82, 0x00, 0x08]).expect("image fits");
    assert_eq!(cpu.ram_read(0).ok(), Some(0x82));
    assert_eq!(cpu.ram_read(1).ok(), Some(0x00));
    assert_eq!(cpu.ram_read(2).ok(), Some(0x08));
    assert_eq!(cpu.ram_read(3).ok(), Some(0));
}

#[test]
fn test_load_program_full_memory_image() {
    let (mut cpu, _) = capture_cpu();
    let image = [0x00u8; MEMORY_SIZE];
    assert!(cpu.load_program(&image).is_ok());
}

#[test]
fn test_load_program_too_large_fails() {
    let (mut cpu, _) = capture_cpu();
    let image = [0x00u8; MEMORY_SIZE + 1];
    assert!(matches!(
        cpu.load_program(&image),
        Err(LoadError::ProgramTooLarge(n)) if n == MEMORY_SIZE + 1
    ));
}

#[test]
fn test_stack_pointer_initialized_high() {
    let (cpu, _) = capture_cpu();
    assert_eq!(cpu.regs.read(SP).ok(), Some(SP_INIT));
}

#[test]
fn test_dump_state_does_not_panic() {
    let cpu = Cpu::new(&Config::default());
    cpu.dump_state();
}

#[test]
fn test_dump_state_near_end_of_memory_does_not_panic() {
    let mut cpu = Cpu::new(&Config::default());
    cpu.pc = MEMORY_SIZE - 1;
    cpu.dump_state();
}

//! LS-8 General-Purpose Register File.
//!
//! This module implements the register file for the LS-8 architecture.
//! It performs the following:
//! 1. **Storage:** Maintains 8 unsigned 8-bit registers (`R0`-`R7`).
//! 2. **Bounds Checking:** Rejects register indices outside `0..8`.
//! 3. **Stack Convention:** Initializes `R7`, the stack pointer, to the top of
//!    the stack region rather than zero.

use crate::common::constants::{NUM_REGISTERS, SP, SP_INIT};
use crate::common::error::VmError;

/// General-purpose register file.
///
/// Contains 8 registers, each holding an unsigned 8-bit value. Register `R7`
/// is reserved as the stack pointer and starts at [`SP_INIT`]; all other
/// registers start at zero.
#[derive(Debug, Clone)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a new register file with the stack pointer at its initial
    /// address and every other register zeroed.
    pub fn new() -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[SP] = SP_INIT;
        Self { regs }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    ///
    /// # Errors
    ///
    /// Returns [`VmError::InvalidRegister`] when `idx` is out of range.
    pub fn read(&self, idx: usize) -> Result<u8, VmError> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(VmError::InvalidRegister(idx))
    }

    /// Writes a value to a register.
    ///
    /// The 8-bit storage makes the wrap law trivial: every stored value is
    /// already in `[0, 255]`.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The value to write.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::InvalidRegister`] when `idx` is out of range.
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), VmError> {
        match self.regs.get_mut(idx) {
            Some(slot) => {
                *slot = val;
                Ok(())
            }
            None => Err(VmError::InvalidRegister(idx)),
        }
    }

    /// Dumps the contents of all registers to stderr.
    ///
    /// Used by state dumps on fatal errors and while tracing.
    pub fn dump(&self) {
        for (i, val) in self.regs.iter().enumerate() {
            eprint!(" R{i}={val:02X}");
        }
        eprintln!();
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

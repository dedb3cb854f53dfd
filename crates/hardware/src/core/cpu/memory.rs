//! Memory Access Helpers.
//!
//! Bounds-checked primitives for the flat 256-byte memory. Every access in
//! the emulator, including the engine's own instruction fetches, goes through
//! these two methods; there is no unchecked path.

use super::Cpu;
use crate::common::error::VmError;

impl Cpu {
    /// Reads the byte at a memory address.
    ///
    /// # Arguments
    ///
    /// * `addr` - Memory address (0-255).
    ///
    /// # Errors
    ///
    /// Returns [`VmError::OutOfRange`] when `addr` is not a valid cell.
    pub fn ram_read(&self, addr: usize) -> Result<u8, VmError> {
        self.ram
            .get(addr)
            .copied()
            .ok_or(VmError::OutOfRange(addr))
    }

    /// Writes a byte to a memory address.
    ///
    /// # Arguments
    ///
    /// * `addr` - Memory address (0-255).
    /// * `val` - The value to store.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::OutOfRange`] when `addr` is not a valid cell.
    pub fn ram_write(&mut self, addr: usize, val: u8) -> Result<(), VmError> {
        match self.ram.get_mut(addr) {
            Some(cell) => {
                *cell = val;
                Ok(())
            }
            None => Err(VmError::OutOfRange(addr)),
        }
    }
}

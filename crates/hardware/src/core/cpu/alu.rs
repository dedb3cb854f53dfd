//! Generic Arithmetic Dispatch.
//!
//! The LS-8 routes its arithmetic and comparison instructions through a
//! single ALU entry point keyed by the raw opcode byte (the encodings carry
//! an ALU marker bit for exactly this purpose). A request naming an
//! operation absent from the table is a fatal `UnsupportedOperation`.

use super::Cpu;
use super::execution::PcUpdate;
use crate::common::error::VmError;
use crate::core::flags::Flags;
use crate::isa::opcodes;

impl Cpu {
    /// Executes an ALU operation on the two register operands of the current
    /// instruction.
    ///
    /// Both operands are register indices read from `pc + 1` and `pc + 2`.
    /// `ADD` and `MUL` store their 8-bit wrapping result into the first
    /// operand register; `CMP` leaves the registers untouched and sets
    /// exactly one of the Less/Greater/Equal flags.
    ///
    /// # Arguments
    ///
    /// * `opcode` - The raw opcode byte selecting the operation.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::UnsupportedOperation`] when `opcode` names no ALU
    /// operation, or propagates register/memory bounds faults.
    pub fn alu(&mut self, opcode: u8) -> Result<PcUpdate, VmError> {
        let ra = self.reg_operand(1)?;
        let rb = self.reg_operand(2)?;
        let a = self.regs.read(ra)?;
        let b = self.regs.read(rb)?;

        match opcode {
            opcodes::ADD => self.regs.write(ra, a.wrapping_add(b))?,
            opcodes::MUL => self.regs.write(ra, a.wrapping_mul(b))?,
            opcodes::CMP => self.fl = Flags::compare(a, b),
            _ => return Err(VmError::UnsupportedOperation(opcode)),
        }
        Ok(PcUpdate::Advance)
    }
}

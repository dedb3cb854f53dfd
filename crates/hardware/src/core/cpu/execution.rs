//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle and the
//! per-instruction handlers. Each step performs the following:
//! 1. **Fetch:** Read the byte at the program counter.
//! 2. **Decode:** Look up the operation; an unmatched byte is a fatal
//!    `UnknownOpcode`, since skipping it would corrupt downstream decoding.
//! 3. **Execute:** Invoke the handler, which reads its own operand bytes at
//!    `pc + 1` and `pc + 2` as needed.
//! 4. **Advance:** Move the program counter past the opcode and its operands,
//!    unless the handler reports that it already repositioned the counter.

use std::io::Write;

use tracing::{debug, trace};

use super::Cpu;
use crate::common::constants::SP;
use crate::common::error::VmError;
use crate::isa::disasm;
use crate::isa::instruction::{Instruction, operand_count};
use crate::isa::opcodes;

/// Outcome of one instruction handler with respect to the program counter.
///
/// Control-transfer instructions (call, return, jumps, halt) set the counter
/// themselves and report [`PcUpdate::Held`]; the engine then skips the
/// generic advance. Modeling this as a return value rather than matching on
/// opcode identity keeps the loop unchanged if more control-transfer
/// instructions are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PcUpdate {
    /// Advance the program counter by `1 + operand_count`.
    Advance,
    /// The handler already set the program counter.
    Held,
}

impl Cpu {
    /// Runs the fetch-decode-execute loop until a `HLT` instruction.
    ///
    /// A program that never executes `HLT` runs forever: memory is finite,
    /// but the program counter wraps into an error (or back into decodable
    /// bytes) rather than terminating. That is a caller error; set
    /// `general.max_steps` in the [`crate::Config`] to turn it into a
    /// reported [`VmError::StepLimit`].
    ///
    /// # Errors
    ///
    /// Propagates the first fatal fault from [`Cpu::step`]. Nothing is
    /// retried; execution stops at the failing instruction.
    pub fn run(&mut self) -> Result<(), VmError> {
        while self.running {
            self.step()?;
        }
        debug!(steps = self.steps, "halted");
        Ok(())
    }

    /// Executes a single fetch-decode-execute step.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::UnknownOpcode`] for an undecodable byte,
    /// [`VmError::StepLimit`] when the configured limit is reached, or
    /// whatever fault the instruction handler raises.
    pub fn step(&mut self) -> Result<(), VmError> {
        if self.max_steps != 0 && self.steps >= self.max_steps {
            return Err(VmError::StepLimit(self.max_steps));
        }
        self.steps += 1;

        let pc = self.pc;
        let opcode = self.ram_read(pc)?;
        let inst = Instruction::decode(opcode).ok_or(VmError::UnknownOpcode { opcode, pc })?;

        if self.trace {
            trace!(pc, op = disasm::mnemonic(inst), "execute");
        }

        let update = self.execute(opcode, inst)?;
        if update == PcUpdate::Advance {
            self.pc = pc + 1 + operand_count(opcode);
        }
        Ok(())
    }

    /// Dispatches a decoded instruction to its handler.
    ///
    /// Opcodes carrying the ALU marker bit go straight to the generic
    /// arithmetic dispatch in [`Cpu::alu`], keyed by the raw byte.
    fn execute(&mut self, opcode: u8, inst: Instruction) -> Result<PcUpdate, VmError> {
        if opcodes::is_alu(opcode) {
            return self.alu(opcode);
        }
        match inst {
            Instruction::Nop => Ok(PcUpdate::Advance),
            Instruction::Hlt => self.hlt(),
            Instruction::Ldi => self.ldi(),
            Instruction::Prn => self.prn(),
            Instruction::Push => self.push(),
            Instruction::Pop => self.pop(),
            Instruction::Call => self.call(),
            Instruction::Ret => self.ret(),
            Instruction::Jmp => self.jmp(),
            Instruction::Jeq => self.jeq(),
            Instruction::Jne => self.jne(),
            // Every decodable ALU-marked byte took the early return above;
            // the arms exist only to keep the match exhaustive.
            Instruction::Add | Instruction::Mul | Instruction::Cmp => self.alu(opcode),
        }
    }

    /// Reads the `n`-th operand byte of the current instruction.
    pub(crate) fn operand(&self, n: usize) -> Result<u8, VmError> {
        self.ram_read(self.pc + n)
    }

    /// Reads the `n`-th operand byte as a register index.
    pub(crate) fn reg_operand(&self, n: usize) -> Result<usize, VmError> {
        Ok(self.operand(n)? as usize)
    }

    /// `HLT`: clears the running flag; the loop exits before the next fetch.
    fn hlt(&mut self) -> Result<PcUpdate, VmError> {
        self.running = false;
        Ok(PcUpdate::Held)
    }

    /// `LDI Ra, imm8`: loads an immediate into a register.
    fn ldi(&mut self) -> Result<PcUpdate, VmError> {
        let ra = self.reg_operand(1)?;
        let imm = self.operand(2)?;
        self.regs.write(ra, imm)?;
        Ok(PcUpdate::Advance)
    }

    /// `PRN Ra`: writes the register's decimal value, one value per line.
    fn prn(&mut self) -> Result<PcUpdate, VmError> {
        let ra = self.reg_operand(1)?;
        let val = self.regs.read(ra)?;
        writeln!(self.output, "{val}")?;
        Ok(PcUpdate::Advance)
    }

    /// `PUSH Ra`: pre-decrements the stack pointer, then stores the register.
    ///
    /// The stack pointer always refers to the last valid pushed value.
    fn push(&mut self) -> Result<PcUpdate, VmError> {
        let ra = self.reg_operand(1)?;
        let val = self.regs.read(ra)?;
        let sp = self.regs.read(SP)?.wrapping_sub(1);
        self.regs.write(SP, sp)?;
        self.ram_write(sp as usize, val)?;
        Ok(PcUpdate::Advance)
    }

    /// `POP Ra`: loads the top of stack, then post-increments the pointer.
    fn pop(&mut self) -> Result<PcUpdate, VmError> {
        let ra = self.reg_operand(1)?;
        let sp = self.regs.read(SP)?;
        let val = self.ram_read(sp as usize)?;
        self.regs.write(ra, val)?;
        self.regs.write(SP, sp.wrapping_add(1))?;
        Ok(PcUpdate::Advance)
    }

    /// `CALL Ra`: stores the return address, then jumps to the register's
    /// address.
    ///
    /// The return address is `pc + 2`, the instruction following the 2-byte
    /// `CALL` encoding, so `RET` resumes after the call rather than at the
    /// subroutine again.
    fn call(&mut self) -> Result<PcUpdate, VmError> {
        let ra = self.reg_operand(1)?;
        let target = self.regs.read(ra)?;
        let ret_addr = (self.pc as u8).wrapping_add(2);
        let sp = self.regs.read(SP)?;
        self.ram_write(sp as usize, ret_addr)?;
        self.regs.write(SP, sp.wrapping_sub(1))?;
        self.pc = target as usize;
        Ok(PcUpdate::Held)
    }

    /// `RET`: increments the stack pointer, then resumes at the stored
    /// return address.
    fn ret(&mut self) -> Result<PcUpdate, VmError> {
        let sp = self.regs.read(SP)?.wrapping_add(1);
        self.regs.write(SP, sp)?;
        self.pc = self.ram_read(sp as usize)? as usize;
        Ok(PcUpdate::Held)
    }

    /// `JMP Ra`: unconditional jump to the register's address.
    fn jmp(&mut self) -> Result<PcUpdate, VmError> {
        let ra = self.reg_operand(1)?;
        self.pc = self.regs.read(ra)? as usize;
        Ok(PcUpdate::Held)
    }

    /// `JEQ Ra`: jump when the Equal flag is set, else fall through.
    fn jeq(&mut self) -> Result<PcUpdate, VmError> {
        if self.fl.equal() {
            self.jmp()
        } else {
            Ok(PcUpdate::Advance)
        }
    }

    /// `JNE Ra`: jump when the Equal flag is clear, else fall through.
    fn jne(&mut self) -> Result<PcUpdate, VmError> {
        if self.fl.equal() {
            Ok(PcUpdate::Advance)
        } else {
            self.jmp()
        }
    }
}

//! LS-8 Instruction Decoder.
//!
//! Decoding is a transient affair: the engine decodes the byte at the program
//! counter fresh on every fetch, and nothing is cached. The low 6 bits of the
//! byte select the operation; the top 2 bits give the operand count that the
//! engine uses to advance the program counter.

use crate::isa::opcodes;

/// A decoded LS-8 operation.
///
/// Operand bytes are not part of the decode; handlers read them from memory
/// at `pc + 1` and `pc + 2` themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// No operation.
    Nop,
    /// Halt execution.
    Hlt,
    /// Load immediate into register: `LDI Ra, imm8`.
    Ldi,
    /// Print register as decimal: `PRN Ra`.
    Prn,
    /// Register addition: `ADD Ra, Rb`.
    Add,
    /// Register multiplication: `MUL Ra, Rb`.
    Mul,
    /// Push register onto stack: `PUSH Ra`.
    Push,
    /// Pop stack into register: `POP Ra`.
    Pop,
    /// Call subroutine at register address: `CALL Ra`.
    Call,
    /// Return from subroutine.
    Ret,
    /// Compare registers, setting flags: `CMP Ra, Rb`.
    Cmp,
    /// Unconditional jump to register address: `JMP Ra`.
    Jmp,
    /// Jump if Equal flag set: `JEQ Ra`.
    Jeq,
    /// Jump if Equal flag clear: `JNE Ra`.
    Jne,
}

impl Instruction {
    /// Decodes one memory byte into an instruction.
    ///
    /// Returns `None` for a byte with no dispatch entry; the engine turns
    /// that into a fatal `UnknownOpcode` error.
    pub const fn decode(byte: u8) -> Option<Self> {
        match byte {
            opcodes::NOP => Some(Self::Nop),
            opcodes::HLT => Some(Self::Hlt),
            opcodes::LDI => Some(Self::Ldi),
            opcodes::PRN => Some(Self::Prn),
            opcodes::ADD => Some(Self::Add),
            opcodes::MUL => Some(Self::Mul),
            opcodes::PUSH => Some(Self::Push),
            opcodes::POP => Some(Self::Pop),
            opcodes::CALL => Some(Self::Call),
            opcodes::RET => Some(Self::Ret),
            opcodes::CMP => Some(Self::Cmp),
            opcodes::JMP => Some(Self::Jmp),
            opcodes::JEQ => Some(Self::Jeq),
            opcodes::JNE => Some(Self::Jne),
            _ => None,
        }
    }
}

/// Returns the number of operand bytes following an opcode (0, 1, or 2).
///
/// Encoded in the top two bits of the opcode byte; together with the opcode
/// byte itself this determines how far the engine advances the program
/// counter after a non-control-transfer instruction.
pub const fn operand_count(opcode: u8) -> usize {
    (opcode >> opcodes::OPERAND_COUNT_SHIFT) as usize
}

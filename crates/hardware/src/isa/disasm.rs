//! Instruction Disassembler for the LS-8.
//!
//! Converts an instruction byte into a human-readable mnemonic for debug
//! tracing, logging, and test diagnostics.

use crate::isa::instruction::Instruction;

/// Returns the mnemonic for a decoded instruction.
pub const fn mnemonic(inst: Instruction) -> &'static str {
    match inst {
        Instruction::Nop => "NOP",
        Instruction::Hlt => "HLT",
        Instruction::Ldi => "LDI",
        Instruction::Prn => "PRN",
        Instruction::Add => "ADD",
        Instruction::Mul => "MUL",
        Instruction::Push => "PUSH",
        Instruction::Pop => "POP",
        Instruction::Call => "CALL",
        Instruction::Ret => "RET",
        Instruction::Cmp => "CMP",
        Instruction::Jmp => "JMP",
        Instruction::Jeq => "JEQ",
        Instruction::Jne => "JNE",
    }
}

/// Disassembles a raw memory byte into a mnemonic.
///
/// Returns `"unknown"` for unrecognised encodings.
pub const fn disassemble(byte: u8) -> &'static str {
    match Instruction::decode(byte) {
        Some(inst) => mnemonic(inst),
        None => "unknown",
    }
}

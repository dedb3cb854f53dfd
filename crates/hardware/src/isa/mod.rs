//! LS-8 instruction set.
//!
//! This module defines the instruction encodings and the decode logic that
//! drives dispatch in the execution engine:
//! 1. **Opcodes:** The byte values of every LS-8 operation and the layout of
//!    the encoding fields packed into them.
//! 2. **Decoding:** Translation of a fetched byte into an [`Instruction`].
//! 3. **Disassembly:** Mnemonics for trace output and test diagnostics.

/// Instruction decoding and operand-width extraction.
pub mod instruction;

/// Opcode byte values and encoding field layout.
pub mod opcodes;

/// Opcode-to-mnemonic translation for tracing and diagnostics.
pub mod disasm;

pub use instruction::Instruction;

//! Unit tests for the instruction set.

/// Disassembler tests.
pub mod disasm;

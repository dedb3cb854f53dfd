//! LS-8 microcomputer virtual machine library.
//!
//! This crate implements an emulator for the LS-8, an 8-bit computer with 8
//! general-purpose registers and 256 bytes of flat memory. It provides:
//! 1. **State:** Register file, memory, program counter, and flags register.
//! 2. **Execution:** The fetch-decode-execute loop with per-instruction handlers.
//! 3. **ISA:** Opcode encodings, instruction decoding, and a disassembler.
//! 4. **Loading:** A line-oriented text loader for `.ls8` program sources.

/// Common types and constants (register file, errors, machine dimensions).
pub mod common;
/// Emulator configuration (defaults, trace and step-limit settings).
pub mod config;
/// CPU core (state, memory access, ALU, execution loop).
pub mod core;
/// Instruction set (opcode encodings, decoding, disassembly).
pub mod isa;
/// Program source loading and parsing.
pub mod sim;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Run-time and load-time error types.
pub use crate::common::{LoadError, VmError};
/// Main CPU type; holds registers, memory, program counter, and flags.
pub use crate::core::Cpu;

//! Error types for the LS-8 emulator.
//!
//! Two error families cover the whole system:
//! 1. **Load-time:** [`LoadError`], raised while reading and parsing a program source.
//! 2. **Run-time:** [`VmError`], raised by the execution engine and state accessors.
//!
//! Nothing in this system is retried: every fault is a programming or input
//! error with no transient cause, so the correct behavior is to stop and
//! report, never to guess and continue.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a program source file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program source file could not be read.
    #[error("program not found: '{}': {source}", .path.display())]
    ProgramNotFound {
        /// Path that was passed to the loader.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A non-blank source line is not a valid 8-bit binary literal.
    ///
    /// Covers both non-digit characters and literals wider than 8 bits.
    #[error("malformed binary literal '{literal}' on line {line}")]
    MalformedLiteral {
        /// One-based line number in the source file.
        line: usize,
        /// The offending token, after comment stripping and trimming.
        literal: String,
    },

    /// The parsed program image does not fit in memory.
    #[error("program of {0} bytes exceeds the 256-byte memory")]
    ProgramTooLarge(usize),
}

/// Errors raised by the execution engine and state accessors.
///
/// All run-time faults are fatal for this VM; no bounds-recovery policy is
/// defined.
#[derive(Debug, Error)]
pub enum VmError {
    /// The byte fetched at the program counter has no dispatch entry.
    ///
    /// Fatal: skipping an undecodable byte would corrupt downstream decoding,
    /// so execution must stop rather than silently continue.
    #[error("unknown opcode {opcode:#010b} at pc {pc:#04x}")]
    UnknownOpcode {
        /// The undecodable byte.
        opcode: u8,
        /// Address the byte was fetched from.
        pc: usize,
    },

    /// An operand addressed a register outside `0..8`.
    #[error("invalid register index {0}")]
    InvalidRegister(usize),

    /// A memory access addressed a cell outside `0..256`.
    #[error("memory address {0:#x} out of range")]
    OutOfRange(usize),

    /// A generic arithmetic request named an operation absent from the
    /// opcode table.
    #[error("unsupported ALU operation {0:#010b}")]
    UnsupportedOperation(u8),

    /// The configured instruction limit was reached without a HLT.
    ///
    /// A program that never halts is a caller error; the limit turns the
    /// otherwise-silent infinite loop into a report.
    #[error("step limit of {0} instructions reached without HLT")]
    StepLimit(u64),

    /// Writing to the output collaborator failed.
    #[error("output write failed: {0}")]
    Output(#[from] std::io::Error),
}

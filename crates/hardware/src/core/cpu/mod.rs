//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the single owner of all
//! machine state. It coordinates the following:
//! 1. **State Management:** Registers, memory, program counter, and flags.
//! 2. **Program Loading:** Copying a parsed program image into memory.
//! 3. **Output:** The sink the `PRN` instruction writes to.
//! 4. **Observability:** A state dump for fatal-error diagnostics.

/// Generic arithmetic dispatch.
pub mod alu;

/// Fetch-decode-execute loop and instruction handlers.
pub mod execution;

/// Bounds-checked memory access.
pub mod memory;

use std::fmt;
use std::io::{self, Write};

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::LoadError;
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::core::flags::Flags;

/// Main CPU structure containing all machine state.
///
/// The CPU owns the register file, memory, program counter, and flags
/// exclusively; there is no concurrent access. A host embedding a `Cpu` must
/// serialize all calls into it.
pub struct Cpu {
    /// General-purpose registers (`R7` is the stack pointer).
    pub regs: RegisterFile,
    /// Program counter: address of the next instruction byte to fetch.
    pub pc: usize,
    /// Flags register, written by `CMP` and read by conditional jumps.
    pub fl: Flags,

    /// Flat byte memory holding the program and the stack.
    pub(crate) ram: [u8; MEMORY_SIZE],
    /// Cleared by the `HLT` instruction; the only way to leave the run loop.
    pub(crate) running: bool,
    /// Emit a trace event per executed instruction.
    pub(crate) trace: bool,
    /// Instruction limit for one run (0 = unlimited).
    pub(crate) max_steps: u64,
    /// Instructions executed so far.
    pub(crate) steps: u64,
    /// Sink for `PRN` output.
    pub(crate) output: Box<dyn Write>,
}

impl Cpu {
    /// Creates a new CPU with zeroed memory and `PRN` output to stdout.
    ///
    /// # Arguments
    ///
    /// * `config` - Host-side settings (tracing, step limit).
    pub fn new(config: &Config) -> Self {
        Self::with_output(config, Box::new(io::stdout()))
    }

    /// Creates a new CPU writing `PRN` output to the given sink.
    ///
    /// The output stream is an external collaborator of the VM; injecting it
    /// lets tests and embedding hosts capture what a program prints.
    pub fn with_output(config: &Config, output: Box<dyn Write>) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            fl: Flags::default(),
            ram: [0; MEMORY_SIZE],
            running: true,
            trace: config.general.trace_instructions,
            max_steps: config.general.max_steps,
            steps: 0,
            output,
        }
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] when the image does not fit.
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.len() > MEMORY_SIZE {
            return Err(LoadError::ProgramTooLarge(image.len()));
        }
        self.ram[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Returns `true` until a `HLT` instruction has executed.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the number of instructions executed so far.
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Dumps the current machine state to stderr.
    ///
    /// Prints the program counter, the three bytes at it, and every register,
    /// in the layout `TRACE: PC | OP A B | R0..R7`.
    pub fn dump_state(&self) {
        let at = |offset: usize| {
            self.ram
                .get(self.pc + offset)
                .copied()
                .unwrap_or(0)
        };
        eprint!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            at(0),
            at(1),
            at(2)
        );
        self.regs.dump();
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("regs", &self.regs)
            .field("pc", &self.pc)
            .field("fl", &self.fl)
            .field("running", &self.running)
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

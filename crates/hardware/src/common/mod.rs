//! Common types and constants used throughout the LS-8 emulator.
//!
//! This module provides the building blocks shared across all components:
//! 1. **Constants:** Machine dimensions (memory size, register count, stack layout).
//! 2. **Error Handling:** Load-time and run-time error types.
//! 3. **Register Management:** The bounds-checked general-purpose register file.

/// Machine dimension constants.
pub mod constants;

/// Error types for loading and execution.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, NUM_REGISTERS, SP, SP_INIT};
pub use error::{LoadError, VmError};
pub use reg::RegisterFile;

//! Core processor implementation.
//!
//! This module contains the CPU state and the machinery that interprets
//! instructions against it.

/// CPU state, memory access, ALU, and execution orchestration.
pub mod cpu;

/// Flags register set by comparisons and read by conditional jumps.
pub mod flags;

pub use self::cpu::Cpu;
pub use self::cpu::execution::PcUpdate;
pub use self::flags::Flags;

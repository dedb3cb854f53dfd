//! # Unit Tests
//!
//! Fine-grained tests for each component of the LS-8 core, organized to
//! mirror the `src/` module tree.

/// Unit tests for shared components (register file, error formatting).
pub mod common;

/// Unit tests for the configuration layer.
pub mod config;


/// Unit tests for the instruction set (decoding, disassembly).
pub mod isa;

//! Simulation utilities and program loading.
//!
//! Provides the text-format program loader that turns `.ls8` sources into
//! byte images ready for [`crate::Cpu::load_program`].

pub mod loader;

//! Configuration for the LS-8 emulator.
//!
//! The machine dimensions of the LS-8 are architectural and never configurable
//! (see [`crate::common::constants`]); configuration covers host-side behavior
//! only. It provides:
//! 1. **Defaults:** Baseline settings for tracing and run limits.
//! 2. **Structures:** The `Config` root with a `general` section.
//! 3. **JSON:** Deserialization for embedding hosts and the CLI `--config` flag.

use serde::Deserialize;

/// Default configuration constants for the emulator.
mod defaults {
    /// Per-instruction tracing is off by default.
    pub const TRACE_INSTRUCTIONS: bool = false;

    /// Instruction limit for one run (0 = unlimited).
    ///
    /// A program without HLT loops forever by design of the architecture;
    /// a non-zero limit converts that caller error into a reported fault.
    pub const MAX_STEPS: u64 = 0;
}

/// Root configuration for the emulator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General emulation settings.
    pub general: GeneralConfig,
}

impl Config {
    /// Deserializes a configuration from a JSON document.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the document is not
    /// valid JSON or a field has the wrong type.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// General emulation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit a trace event for every executed instruction.
    pub trace_instructions: bool,

    /// Stop with [`crate::VmError::StepLimit`] after this many instructions
    /// (0 = unlimited).
    pub max_steps: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: defaults::TRACE_INSTRUCTIONS,
            max_steps: defaults::MAX_STEPS,
        }
    }
}

//! Program Source Loader.
//!
//! This module reads and parses `.ls8` program sources. The format is
//! line-oriented text, one instruction byte per logical line:
//! 1. **Comments:** Everything from the first `#` to the end of the line is
//!    ignored.
//! 2. **Blank lines:** Skipped after comment stripping and whitespace
//!    trimming.
//! 3. **Values:** The remaining token is a base-2 literal (`0`/`1` digits)
//!    stored as the next consecutive memory byte, starting at address 0.
//!
//! A malformed literal is a fatal load error and is surfaced with its line
//! number; it is never silently skipped.

use std::fs;
use std::path::Path;

use crate::common::error::LoadError;

/// Reads and parses a program source file into a byte image.
///
/// # Arguments
///
/// * `path` - Path to the `.ls8` text source.
///
/// # Errors
///
/// Returns [`LoadError::ProgramNotFound`] when the file cannot be read, or
/// propagates parse errors from [`parse_source`].
pub fn read_program(path: &Path) -> Result<Vec<u8>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::ProgramNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    parse_source(&text)
}

/// Parses program source text into a byte image.
///
/// A source consisting solely of comments and blank lines yields an empty
/// image; loaded into the zeroed memory, the first fetch then decodes opcode
/// 0 (`NOP`) and execution walks forward through zeroes. Running such a
/// program is a caller error (there is no `HLT` to reach).
///
/// # Errors
///
/// Returns [`LoadError::MalformedLiteral`] when a non-blank line is not a
/// valid 8-bit binary literal.
pub fn parse_source(text: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let value = line.split('#').next().unwrap_or("").trim();
        if value.is_empty() {
            continue;
        }
        let byte = u8::from_str_radix(value, 2).map_err(|_| LoadError::MalformedLiteral {
            line: idx + 1,
            literal: value.to_string(),
        })?;
        image.push(byte);
    }
    Ok(image)
}

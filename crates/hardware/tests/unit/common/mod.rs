//! Unit tests for shared components.

/// Register file tests, including the wrap-law property.
pub mod reg;

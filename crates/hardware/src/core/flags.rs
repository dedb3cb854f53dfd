//! LS-8 Flags Register.
//!
//! The flags register holds the outcome of the most recent `CMP` instruction
//! as three mutually exclusive condition bits, encoded `00000LGE`. Only `CMP`
//! writes the register; conditional jumps read it.

use std::cmp::Ordering;

/// Bit set when the first compare operand was less than the second.
const FL_LESS: u8 = 0b100;

/// Bit set when the first compare operand was greater than the second.
const FL_GREATER: u8 = 0b010;

/// Bit set when the compare operands were equal.
const FL_EQUAL: u8 = 0b001;

/// The flags register.
///
/// Exactly one of the Less/Greater/Equal bits is set after a comparison;
/// a freshly constructed register holds no bits at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u8);

impl Flags {
    /// Computes the flags for comparing `a` to `b`.
    ///
    /// Deriving the bits from the total order guarantees that exactly one of
    /// the three conditions holds; ties cannot be special-cased
    /// inconsistently.
    pub fn compare(a: u8, b: u8) -> Self {
        Self(match a.cmp(&b) {
            Ordering::Less => FL_LESS,
            Ordering::Greater => FL_GREATER,
            Ordering::Equal => FL_EQUAL,
        })
    }

    /// Returns `true` when the Less bit is set.
    pub const fn less(self) -> bool {
        self.0 & FL_LESS != 0
    }

    /// Returns `true` when the Greater bit is set.
    pub const fn greater(self) -> bool {
        self.0 & FL_GREATER != 0
    }

    /// Returns `true` when the Equal bit is set.
    pub const fn equal(self) -> bool {
        self.0 & FL_EQUAL != 0
    }

    /// Returns the raw `00000LGE` bit pattern.
    pub const fn bits(self) -> u8 {
        self.0
    }
}

//! Machine dimension constants for the LS-8.
//!
//! These values are fixed by the LS-8 architecture: an 8-bit machine with a
//! byte-addressed 256-cell memory and eight general-purpose registers.

/// Total size of memory in bytes.
///
/// Memory holds both the loaded program (from address 0) and the call/return
/// stack, which grows downward from [`SP_INIT`]. Addresses are `0..=255`.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Index of the stack pointer register.
///
/// Register 7 is reserved by convention as the stack pointer.
pub const SP: usize = 7;

/// Initial value of the stack pointer register.
///
/// The stack grows downward from this address. The emulator does not enforce
/// separation between the stack and the program region; keeping them apart is
/// the loaded program's responsibility.
pub const SP_INIT: u8 = 0xF4;

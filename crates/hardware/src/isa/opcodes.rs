//! LS-8 opcode encodings.
//!
//! An LS-8 instruction is a single byte laid out as `AABCDDDD`:
//! - `AA` - number of operand bytes that follow the opcode (0, 1, or 2),
//! - `B` - set when the operation is handled by the ALU,
//! - `C` - set when the instruction may reposition the program counter,
//! - `DDDD` - instruction identifier.
//!
//! The engine derives instruction length from `AA` and routes `B`-marked
//! opcodes through the generic ALU dispatch. The `C` bit is informational
//! only, since control transfer is modeled by the handler's return value
//! rather than by opcode identity.

/// Bit shift extracting the operand-byte count from an opcode.
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Bit marking an opcode as an ALU operation.
pub const ALU_FLAG: u8 = 0b0010_0000;

/// No operation.
pub const NOP: u8 = 0b00000000;

/// Halt: clears the running flag, stopping execution.
pub const HLT: u8 = 0b00000001;

/// Return from subroutine: pops the return address into the program counter.
pub const RET: u8 = 0b00010001;

/// Push a register value onto the stack.
pub const PUSH: u8 = 0b01000101;

/// Pop the top of the stack into a register.
pub const POP: u8 = 0b01000110;

/// Print a register value as a decimal line on the output stream.
pub const PRN: u8 = 0b01000111;

/// Call the subroutine at the address held in a register.
pub const CALL: u8 = 0b01010000;

/// Unconditional jump to the address held in a register.
pub const JMP: u8 = 0b01010100;

/// Jump if the Equal flag is set.
pub const JEQ: u8 = 0b01010101;

/// Jump if the Equal flag is clear.
pub const JNE: u8 = 0b01010110;

/// Load an immediate value into a register.
pub const LDI: u8 = 0b10000010;

/// Add two registers, storing into the first (mod 256).
pub const ADD: u8 = 0b10100000;

/// Multiply two registers, storing into the first (mod 256).
pub const MUL: u8 = 0b10100010;

/// Compare two registers, setting exactly one of the L/G/E flags.
pub const CMP: u8 = 0b10100111;

/// Returns `true` when the opcode's ALU bit is set.
pub const fn is_alu(opcode: u8) -> bool {
    opcode & ALU_FLAG != 0
}

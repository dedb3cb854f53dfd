//! # Disassembler Tests

use ls8_core::isa::disasm::{disassemble, mnemonic};
use ls8_core::isa::{Instruction, opcodes};

#[test]
fn test_disassemble_known_bytes() {
    assert_eq!(disassemble(opcodes::LDI), "LDI");
    assert_eq!(disassemble(opcodes::PRN), "PRN");
    assert_eq!(disassemble(opcodes::HLT), "HLT");
    assert_eq!(disassemble(opcodes::CMP), "CMP");
}

#[test]
fn test_disassemble_unknown_byte() {
    assert_eq!(disassemble(0b00100000), "unknown");
}

#[test]
fn test_mnemonic_for_every_instruction() {
    let all = [
        (Instruction::Nop, "NOP"),
        (Instruction::Hlt, "HLT"),
        (Instruction::Ldi, "LDI"),
        (Instruction::Prn, "PRN"),
        (Instruction::Add, "ADD"),
        (Instruction::Mul, "MUL"),
        (Instruction::Push, "PUSH"),
        (Instruction::Pop, "POP"),
        (Instruction::Call, "CALL"),
        (Instruction::Ret, "RET"),
        (Instruction::Cmp, "CMP"),
        (Instruction::Jmp, "JMP"),
        (Instruction::Jeq, "JEQ"),
        (Instruction::Jne, "JNE"),
    ];
    for (inst, text) in all {
        assert_eq!(mnemonic(inst), text);
    }
}

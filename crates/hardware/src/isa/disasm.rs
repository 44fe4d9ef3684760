//! Instruction Disassembler for the MIPS32 integer subset.
//!
//! Converts a 32-bit instruction encoding into a mnemonic string for
//! trace output and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//!
//! assert_eq!(disassemble(0x2108_0005), "addi t0, t0, 5");
//! assert_eq!(disassemble(0x8FA8_0004), "lw t0, 4(sp)");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::instruction::{InstructionBits, extend_imm};
use crate::isa::mips32::{funct, opcodes};

/// Disassembles one instruction word.
///
/// Returns `"unknown"` followed by the raw word for encodings outside the
/// supported subset. The all-zero word prints as `nop`.
pub fn disassemble(inst: u32) -> String {
    if inst == 0 {
        return "nop".to_string();
    }

    let rs = reg_name(inst.rs());
    let rt = reg_name(inst.rt());
    let rd = reg_name(inst.rd());
    let simm = extend_imm(inst.imm16(), false) as i32;
    let uimm = inst.imm16();

    match inst.opcode() {
        opcodes::OP_SPECIAL => {
            let mnemonic = match inst.funct() {
                funct::SLL => return format!("sll {rd}, {rt}, {}", inst.shamt()),
                funct::SRL => return format!("srl {rd}, {rt}, {}", inst.shamt()),
                funct::SRA => return format!("sra {rd}, {rt}, {}", inst.shamt()),
                funct::JR => return format!("jr {rs}"),
                funct::ADD => "add",
                funct::ADDU => "addu",
                funct::SUB => "sub",
                funct::SUBU => "subu",
                funct::AND => "and",
                funct::OR => "or",
                funct::XOR => "xor",
                funct::NOR => "nor",
                funct::SLT => "slt",
                funct::SLTU => "sltu",
                _ => return format!("unknown {inst:#010x}"),
            };
            format!("{mnemonic} {rd}, {rs}, {rt}")
        }
        opcodes::OP_J => format!("j {:#x}", inst.jump_index() << 2),
        opcodes::OP_JAL => format!("jal {:#x}", inst.jump_index() << 2),
        opcodes::OP_BEQ => format!("beq {rs}, {rt}, {simm}"),
        opcodes::OP_BNE => format!("bne {rs}, {rt}, {simm}"),
        opcodes::OP_ADDI => format!("addi {rt}, {rs}, {simm}"),
        opcodes::OP_ADDIU => format!("addiu {rt}, {rs}, {simm}"),
        opcodes::OP_SLTI => format!("slti {rt}, {rs}, {simm}"),
        opcodes::OP_SLTIU => format!("sltiu {rt}, {rs}, {simm}"),
        opcodes::OP_ANDI => format!("andi {rt}, {rs}, {uimm:#x}"),
        opcodes::OP_ORI => format!("ori {rt}, {rs}, {uimm:#x}"),
        opcodes::OP_XORI => format!("xori {rt}, {rs}, {uimm:#x}"),
        opcodes::OP_LUI => format!("lui {rt}, {uimm:#x}"),
        opcodes::OP_LW => format!("lw {rt}, {simm}({rs})"),
        opcodes::OP_LBU => format!("lbu {rt}, {simm}({rs})"),
        opcodes::OP_LHU => format!("lhu {rt}, {simm}({rs})"),
        opcodes::OP_SW => format!("sw {rt}, {simm}({rs})"),
        opcodes::OP_SH => format!("sh {rt}, {simm}({rs})"),
        opcodes::OP_SB => format!("sb {rt}, {simm}({rs})"),
        _ => format!("unknown {inst:#010x}"),
    }
}

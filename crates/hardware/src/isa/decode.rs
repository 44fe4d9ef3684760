//! MIPS32 Control-Signal Decoder.
//!
//! Maps a raw instruction word onto the [`ControlSignals`] that steer the
//! datapath. The decoder is a pure function shared by every execution model.
//! Encodings outside the supported subset decode to the all-`false` no-op and
//! are reported with a `warn!` event.

use tracing::warn;

use crate::core::pipeline::signals::{AluClass, ControlSignals};
use crate::isa::instruction::InstructionBits;
use crate::isa::mips32::{funct, opcodes};

/// Decodes an instruction word into control signals.
///
/// # Examples
///
/// ```
/// use mipsim_core::isa::decode::decode;
///
/// // lw $t0, 4($sp)
/// let ctrl = decode(0x8FA8_0004);
/// assert!(ctrl.mem_read && ctrl.mem_to_reg && ctrl.reg_write && ctrl.alu_src);
/// assert!(!ctrl.reg_dest);
/// ```
pub fn decode(inst: u32) -> ControlSignals {
    let base = ControlSignals::default();
    match inst.opcode() {
        opcodes::OP_SPECIAL => decode_special(inst),

        opcodes::OP_J => ControlSignals { jump: true, ..base },
        opcodes::OP_JAL => ControlSignals {
            jump: true,
            link: true,
            reg_write: true,
            ..base
        },
        opcodes::OP_BEQ => ControlSignals {
            branch: true,
            alu_op: AluClass::Sub,
            ..base
        },
        opcodes::OP_BNE => ControlSignals {
            branch: true,
            bne: true,
            alu_op: AluClass::Sub,
            ..base
        },

        opcodes::OP_ADDI | opcodes::OP_ADDIU => ControlSignals {
            alu_src: true,
            reg_write: true,
            alu_op: AluClass::Add,
            ..base
        },
        opcodes::OP_SLTI | opcodes::OP_SLTIU | opcodes::OP_LUI => ControlSignals {
            alu_src: true,
            reg_write: true,
            alu_op: AluClass::Immediate,
            ..base
        },
        opcodes::OP_ANDI | opcodes::OP_ORI | opcodes::OP_XORI => ControlSignals {
            alu_src: true,
            reg_write: true,
            zero_extend: true,
            alu_op: AluClass::Immediate,
            ..base
        },

        op @ (opcodes::OP_LW | opcodes::OP_LBU | opcodes::OP_LHU) => ControlSignals {
            alu_src: true,
            mem_read: true,
            mem_to_reg: true,
            reg_write: true,
            byte: op == opcodes::OP_LBU,
            halfword: op == opcodes::OP_LHU,
            ..base
        },
        op @ (opcodes::OP_SW | opcodes::OP_SH | opcodes::OP_SB) => ControlSignals {
            alu_src: true,
            mem_write: true,
            byte: op == opcodes::OP_SB,
            halfword: op == opcodes::OP_SH,
            ..base
        },

        op => {
            warn!("unsupported opcode {op:#04x} in {inst:#010x}, treated as nop");
            base
        }
    }
}

fn decode_special(inst: u32) -> ControlSignals {
    let base = ControlSignals::default();
    let rtype = ControlSignals {
        reg_dest: true,
        reg_write: true,
        alu_op: AluClass::Funct,
        ..base
    };
    match inst.funct() {
        funct::SLL | funct::SRL | funct::SRA => ControlSignals {
            shift: true,
            ..rtype
        },
        funct::JR => ControlSignals {
            jump_reg: true,
            ..base
        },
        funct::ADD
        | funct::ADDU
        | funct::SUB
        | funct::SUBU
        | funct::AND
        | funct::OR
        | funct::XOR
        | funct::NOR
        | funct::SLT
        | funct::SLTU => rtype,
        f => {
            warn!("unsupported function code {f:#04x} in {inst:#010x}, treated as nop");
            base
        }
    }
}

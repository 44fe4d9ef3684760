//! Decode stage body.
//!
//! Turns a fetched word into an [`IdEx`] entry: control signals, register
//! fields, the extended immediate, both control-flow targets, and the
//! architectural destination. Operand values are filled in by the caller.

use tracing::trace;

use crate::common::RegisterFile;
use crate::common::constants::LINK_REG;
use crate::core::pipeline::latches::IdEx;
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::{InstructionBits, branch_target, extend_imm, jump_target};

/// Architectural register an instruction writes: `r31` for links, else `rd` or `rt`.
pub const fn dest_reg(ctrl: &ControlSignals, rt: usize, rd: usize) -> usize {
    if ctrl.link {
        LINK_REG
    } else if ctrl.reg_dest {
        rd
    } else {
        rt
    }
}

/// Decodes the instruction at `pc` without reading any registers.
pub fn decode_fields(pc: u32, inst: u32) -> IdEx {
    let ctrl = decode(inst);
    let imm = extend_imm(inst.imm16(), ctrl.zero_extend);
    trace!("ID  {pc:#010x} {}", disassemble(inst));
    IdEx {
        valid: true,
        pc,
        inst,
        opcode: inst.opcode(),
        rs: inst.rs(),
        rt: inst.rt(),
        rd: inst.rd(),
        shamt: inst.shamt(),
        funct: inst.funct(),
        imm,
        ctrl,
        jump_target: jump_target(pc, inst.jump_index()),
        branch_target: branch_target(pc, imm),
        write_reg: dest_reg(&ctrl, inst.rt(), inst.rd()),
        ..IdEx::default()
    }
}

/// Decodes and reads both source registers from the architectural file.
pub fn decode_and_read(pc: u32, inst: u32, regs: &RegisterFile) -> IdEx {
    let mut id_ex = decode_fields(pc, inst);
    id_ex.rv1 = regs.read(id_ex.rs);
    id_ex.rv2 = regs.read(id_ex.rt);
    id_ex
}

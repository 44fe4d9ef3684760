//! Execute stage body.
//!
//! Applies the EX/MEM and MEM/WB bypasses to both operands, selects the ALU
//! inputs, runs the ALU and resolves control flow. The caller decides what a
//! redirect flushes.

use tracing::{debug, trace};

use crate::core::pipeline::hazards::{Bypass, ForwardSource, forward_operand};
use crate::core::pipeline::latches::{ExMem, IdEx};
use crate::core::units::alu::Alu;
use crate::stats::SimStats;

/// Result of executing one instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecuteOutcome {
    /// New EX/MEM contents.
    pub ex_mem: ExMem,
    /// Target of a taken branch or jump.
    pub redirect: Option<u32>,
}

/// Executes the instruction in `id_ex`.
///
/// # Arguments
///
/// * `id_ex` - Instruction and operands read at decode (or issue).
/// * `sources` - Registers the two operands come from; `None` for unused operands.
/// * `ex_mem` - EX/MEM bypass from the start of the cycle.
/// * `mem_wb` - MEM/WB bypass from the start of the cycle.
/// * `stats` - Forwarding counters.
pub fn execute<K: Copy + PartialEq>(
    id_ex: &IdEx,
    sources: (Option<K>, Option<K>),
    ex_mem: Option<Bypass<K>>,
    mem_wb: Option<Bypass<K>>,
    stats: &mut SimStats,
) -> ExecuteOutcome {
    if !id_ex.valid {
        return ExecuteOutcome::default();
    }

    let (rv1, src1) = forward_operand(sources.0, id_ex.rv1, ex_mem, mem_wb);
    let (rv2, src2) = forward_operand(sources.1, id_ex.rv2, ex_mem, mem_wb);
    for src in [src1, src2] {
        match src {
            ForwardSource::ExMem => stats.forwards_ex_mem += 1,
            ForwardSource::MemWb => stats.forwards_mem_wb += 1,
            ForwardSource::RegFile => {}
        }
    }

    let ctrl = &id_ex.ctrl;
    let a = if ctrl.shift { id_ex.shamt } else { rv1 };
    let b = if ctrl.alu_src { id_ex.imm } else { rv2 };
    let op = Alu::control(ctrl.alu_op, id_ex.funct, id_ex.opcode);
    let (alu_result, zero) = Alu::execute(op, a, b);

    let redirect = if ctrl.jump_reg {
        Some(rv1)
    } else if ctrl.jump {
        Some(id_ex.jump_target)
    } else if ctrl.branch_taken(zero) {
        Some(id_ex.branch_target)
    } else {
        None
    };

    trace!("EX  {:#010x} {op:?} a={a:#x} b={b:#x} -> {alu_result:#x}", id_ex.pc);
    if let Some(target) = redirect {
        debug!("EX  {:#010x} redirects fetch to {target:#010x}", id_ex.pc);
    }

    ExecuteOutcome {
        ex_mem: ExMem {
            valid: true,
            pc: id_ex.pc,
            inst: id_ex.inst,
            ctrl: id_ex.ctrl,
            result: if ctrl.link { id_ex.link_value() } else { alu_result },
            store_data: rv2,
            write_reg: id_ex.write_reg,
            phys_dest: id_ex.phys_dest,
            rob_tag: id_ex.rob_tag,
        },
        redirect,
    }
}

//! Memory stage body.
//!
//! Loads and stores go through the [`Lsu`], which applies sub-word lane masking.
//! A failed access returns the error before the MEM/WB entry exists, leaving
//! the EX/MEM entry in place for a retry.

use tracing::trace;

use crate::common::error::Result;
use crate::core::pipeline::latches::{ExMem, MemWb};
use crate::core::units::lsu::Lsu;
use crate::soc::traits::Memory;

/// Performs the memory access of the instruction in `ex_mem`.
pub fn access(ex_mem: &ExMem, mem: &mut dyn Memory) -> Result<MemWb> {
    if !ex_mem.valid {
        return Ok(MemWb::default());
    }

    let ctrl = &ex_mem.ctrl;
    let addr = ex_mem.result;
    let mut mem_data = 0;
    if ctrl.mem_read {
        mem_data = Lsu::load(mem, addr, ctrl.width())?;
        trace!("MEM {:#010x} load [{addr:#010x}] -> {mem_data:#x}", ex_mem.pc);
    } else if ctrl.mem_write {
        Lsu::store(mem, addr, ctrl.width(), ex_mem.store_data)?;
        trace!("MEM {:#010x} store [{addr:#010x}] <- {:#x}", ex_mem.pc, ex_mem.store_data);
    }

    Ok(MemWb {
        valid: true,
        pc: ex_mem.pc,
        inst: ex_mem.inst,
        ctrl: ex_mem.ctrl,
        result: ex_mem.result,
        mem_data,
        write_reg: ex_mem.write_reg,
        phys_dest: ex_mem.phys_dest,
        rob_tag: ex_mem.rob_tag,
    })
}

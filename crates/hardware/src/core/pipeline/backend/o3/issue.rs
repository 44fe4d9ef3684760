//! Issue and execute.
//!
//! Selects one reservation station per cycle, reads its operands from the
//! physical register file and executes it with EX/MEM and MEM/WB bypasses
//! keyed by physical register. Control transfers resolve here.

use tracing::debug;

use super::OooEngine;
use crate::core::pipeline::backend::shared::execute;
use crate::core::pipeline::latches::{ExMem, IdEx, MemWb};
use crate::core::pipeline::traits::PipelineLatch;
use crate::stats::SimStats;

impl OooEngine {
    /// Returns `true` when a taken branch or jump redirected fetch.
    pub(super) fn execute_stage(
        &mut self,
        prev_ex_mem: &ExMem,
        prev_mem_wb: &MemWb,
        stats: &mut SimStats,
    ) -> bool {
        let ex_bypass = prev_ex_mem.bypass_phys();
        let wb_bypass = prev_mem_wb.bypass_phys();

        let selected = self.stations.select(|p| {
            ex_bypass.is_some_and(|b| b.key == p) || wb_bypass.is_some_and(|b| b.key == p)
        });
        let Some(entry) = selected else {
            self.ex_mem.flush();
            return false;
        };

        let id_ex = IdEx {
            rv1: entry.src1.phys.map_or(0, |p| self.prf.read(p)),
            rv2: entry.src2.phys.map_or(0, |p| self.prf.read(p)),
            phys_rs: entry.src1.phys,
            phys_rt: entry.src2.phys,
            phys_dest: entry.dest,
            rob_tag: Some(entry.rob_tag),
            ..entry.op
        };
        let out = execute::execute(
            &id_ex,
            (entry.src1.phys, entry.src2.phys),
            ex_bypass,
            wb_bypass,
            stats,
        );
        self.ex_mem = out.ex_mem;

        if id_ex.ctrl.is_control_flow() {
            self.control_pending = false;
        }
        let Some(target) = out.redirect else {
            return false;
        };

        debug!(
            "EX  {:#010x} flush: {} queued, fetch -> {target:#010x}",
            id_ex.pc,
            self.fetch_queue.len()
        );
        self.fetch_queue.clear();
        self.decoded = None;
        self.fetch_pc = target;
        self.rob.mark_mispredicted(entry.rob_tag);
        stats.flushes += 1;
        true
    }
}

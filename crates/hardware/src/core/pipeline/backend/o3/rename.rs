//! Rename stage.
//!
//! Maps the sources of the instruction in the Decode -> Rename latch through
//! the RAT, allocates a physical destination, appends the ROB entry and fills a
//! reservation station. Sources are looked up before the destination is
//! remapped, so `addi r5, r5, 1` reads the previous producer of `r5`.
//!
//! Any missing resource (ROB slot, station, free physical register) stalls the
//! stage with the latch intact and no state changed.

use tracing::{debug, trace};

use super::OooEngine;
use super::stations::{Operand, StationEntry};
use crate::core::pipeline::rob::RenamedDest;
use crate::stats::SimStats;

impl OooEngine {
    fn rename_source(&self, used: bool, arch: usize) -> Operand {
        if !used {
            return Operand::UNUSED;
        }
        let phys = self.rat.lookup(arch);
        Operand {
            phys: Some(phys),
            ready: self.prf.is_ready(phys),
        }
    }

    pub(super) fn rename_stage(&mut self, stats: &mut SimStats) {
        let Some(id) = self.decoded else {
            return;
        };
        let ctrl = id.ctrl;
        let needs_dest = ctrl.reg_write && id.write_reg != 0;

        let slot = match self.stations.free_slot() {
            Some(slot) if !self.rob.is_full() => slot,
            _ => {
                debug!("RN  {:#010x} stall: ROB or stations full", id.pc);
                stats.stalls_rename += 1;
                return;
            }
        };

        let src1 = self.rename_source(ctrl.reads_rs(), id.rs);
        let src2 = self.rename_source(ctrl.reads_rt(), id.rt);

        let dest = if needs_dest {
            let Some(phys) = self.free_list.allocate() else {
                debug!("RN  {:#010x} stall: free list empty", id.pc);
                stats.stalls_rename += 1;
                return;
            };
            Some(RenamedDest {
                arch: id.write_reg,
                phys,
                prev: self.rat.lookup(id.write_reg),
            })
        } else {
            None
        };

        let Some(rob_tag) =
            self.rob
                .allocate(id.pc, id.inst, dest, ctrl.is_mem(), ctrl.is_control_flow())
        else {
            if let Some(d) = dest {
                self.free_list.cancel(d.phys);
            }
            stats.stalls_rename += 1;
            return;
        };

        if let Some(d) = dest {
            let _ = self.rat.remap(d.arch, d.phys);
            self.prf.mark_pending(d.phys);
            trace!("RN  {:#010x} r{} -> {} (was {})", id.pc, d.arch, d.phys, d.prev);
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.stations.fill(
            slot,
            StationEntry {
                op: id,
                src1,
                src2,
                dest: dest.map(|d| d.phys),
                rob_tag,
                seq,
            },
        );
        self.decoded = None;
    }
}

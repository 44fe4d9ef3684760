//! Writeback and commit.
//!
//! Writeback publishes a result to the physical register file, wakes up its
//! consumers and completes the ROB entry. Commit retires the ROB head, at most
//! one per cycle, copying its value into the architectural view and returning
//! the displaced physical register to the free list.

use tracing::{debug, trace};

use super::OooEngine;
use crate::common::RegisterFile;
use crate::common::error::{Result, SimError};
use crate::core::pipeline::latches::MemWb;
use crate::stats::SimStats;

impl OooEngine {
    pub(super) fn writeback_stage(&mut self, mem_wb: &MemWb, stats: &mut SimStats) {
        if !mem_wb.valid {
            return;
        }
        let value = mem_wb.value();
        let dest = mem_wb.phys_dest.filter(|_| mem_wb.writes_reg());
        if let Some(phys) = dest {
            self.prf.write(phys, value);
            self.stations.wakeup(phys);
        }
        if let Some(tag) = mem_wb.rob_tag {
            self.rob.complete(tag, value);
        }
        trace!("WB  {:#010x} complete", mem_wb.pc);
        stats
            .commit_log
            .complete(mem_wb.pc, dest.map(|_| mem_wb.write_reg));
    }

    pub(super) fn commit_stage(
        &mut self,
        regs: &mut RegisterFile,
        stats: &mut SimStats,
    ) -> Result<()> {
        let Some(entry) = self.rob.commit_head() else {
            return Ok(());
        };

        if let Some(dest) = entry.dest {
            regs.write(dest.arch, self.prf.read(dest.phys));
            if self.rat.maps(dest.prev) {
                return Err(SimError::ReleaseWhileMapped(dest.prev));
            }
            self.free_list.release(dest.prev)?;
            debug!(
                "CM  {:#010x} r{} = {:#x}, free {}",
                entry.pc,
                dest.arch,
                self.prf.read(dest.phys),
                dest.prev
            );
        } else {
            debug!("CM  {:#010x}", entry.pc);
        }

        regs.pc = entry.pc;
        stats.instructions_retired += 1;
        stats.commit_log.commit(entry.pc, entry.dest.map(|d| d.arch));
        Ok(())
    }
}

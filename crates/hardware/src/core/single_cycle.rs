//! Single-cycle model.
//!
//! Executes one instruction to completion per tick with no pipeline state. It
//! is the functional oracle the pipelined models are checked against.
//!
//! Every fallible access happens before any architectural state changes, so a
//! failed tick leaves registers and PC untouched.

use tracing::trace;

use crate::common::RegisterFile;
use crate::common::constants::WORD_BYTES;
use crate::common::error::Result;
use crate::core::pipeline::backend::shared::{decode, execute, memory};
use crate::core::pipeline::engine::ExecutionModel;
use crate::soc::traits::Memory;
use crate::stats::SimStats;

/// Single-cycle processor model.
#[derive(Debug, Default)]
pub struct SingleCycle {
    fetch_limit: Option<u32>,
}

impl SingleCycle {
    /// Creates the model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes the instruction at `regs.pc`.
    pub fn advance(
        &mut self,
        regs: &mut RegisterFile,
        mem: &mut dyn Memory,
        stats: &mut SimStats,
    ) -> Result<()> {
        let pc = regs.pc;
        let inst = mem.read_word(pc)?;
        let id_ex = decode::decode_and_read(pc, inst, regs);
        let out = execute::execute::<usize>(&id_ex, (None, None), None, None, stats);
        let wb = memory::access(&out.ex_mem, mem)?;

        let dest = wb.writes_reg().then_some(wb.write_reg);
        if let Some(rd) = dest {
            regs.write(rd, wb.value());
        }
        regs.pc = out.redirect.unwrap_or_else(|| pc.wrapping_add(WORD_BYTES));
        trace!("SC  {pc:#010x} retired, next pc {:#010x}", regs.pc);

        stats.instructions_retired += 1;
        stats.commit_log.commit(pc, dest);
        Ok(())
    }

    fn past_limit(&self, pc: u32) -> bool {
        self.fetch_limit.is_some_and(|limit| pc >= limit)
    }
}

impl ExecutionModel for SingleCycle {
    fn tick(
        &mut self,
        regs: &mut RegisterFile,
        mem: &mut dyn Memory,
        stats: &mut SimStats,
    ) -> Result<()> {
        if self.past_limit(regs.pc) {
            return Ok(());
        }
        self.advance(regs, mem, stats)
    }

    fn set_fetch_limit(&mut self, limit: Option<u32>) {
        self.fetch_limit = limit;
    }

    fn is_halted(&self, regs: &RegisterFile) -> bool {
        self.past_limit(regs.pc)
    }
}

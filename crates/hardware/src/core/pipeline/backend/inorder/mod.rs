//! In-order five-stage pipeline.
//!
//! IF → ID → EX → MEM → WB, connected by four latches, with:
//! - Load-use hazard detection: one-cycle stall with a bubble inserted into EX/MEM.
//!   The held ID/EX operands are re-read after Writeback during the stall.
//! - Forwarding from EX/MEM (non-loads) and MEM/WB into Execute.
//! - Branch and jump resolution in Execute; a taken transfer flushes IF/ID and ID/EX.
//!
//! Stages run in reverse order each cycle so that every stage consumes the
//! latch its predecessor produced in the previous cycle.

use tracing::{debug, trace};

use crate::common::RegisterFile;
use crate::common::constants::WORD_BYTES;
use crate::common::error::Result;
use crate::core::pipeline::backend::shared::{decode, execute, memory};
use crate::core::pipeline::engine::ExecutionModel;
use crate::core::pipeline::hazards::need_stall_load_use;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::disasm::disassemble;
use crate::soc::traits::Memory;
use crate::stats::SimStats;

/// In-order pipeline state.
#[derive(Debug, Default)]
pub struct InOrderPipeline {
    /// Fetch -> Decode latch.
    pub if_id: IfId,
    /// Decode -> Execute latch.
    pub id_ex: IdEx,
    /// Execute -> Memory latch.
    pub ex_mem: ExMem,
    /// Memory -> Writeback latch.
    pub mem_wb: MemWb,
    /// Address of the next fetch.
    pub fetch_pc: u32,
    started: bool,
    fetch_limit: Option<u32>,
}

impl InOrderPipeline {
    /// Creates an empty pipeline; fetch starts from `regs.pc` on the first tick.
    pub fn new() -> Self {
        Self::default()
    }

    fn writeback(mem_wb: &MemWb, regs: &mut RegisterFile, stats: &mut SimStats) {
        if !mem_wb.valid {
            return;
        }
        let dest = mem_wb.writes_reg().then_some(mem_wb.write_reg);
        if let Some(rd) = dest {
            regs.write(rd, mem_wb.value());
        }
        regs.pc = mem_wb.pc;
        trace!("WB  {:#010x} retired", mem_wb.pc);
        stats.instructions_retired += 1;
        stats.commit_log.commit(mem_wb.pc, dest);
    }

    fn fetch(&mut self, mem: &mut dyn Memory) -> Result<()> {
        if self.fetch_limit.is_some_and(|limit| self.fetch_pc >= limit) {
            self.if_id.flush();
            return Ok(());
        }
        match mem.read_word(self.fetch_pc) {
            Ok(inst) => {
                trace!("IF  {:#010x} {}", self.fetch_pc, disassemble(inst));
                self.if_id = IfId {
                    valid: true,
                    pc: self.fetch_pc,
                    inst,
                };
                self.fetch_pc = self.fetch_pc.wrapping_add(WORD_BYTES);
                Ok(())
            }
            Err(e) => {
                self.if_id.flush();
                Err(e)
            }
        }
    }
}

impl ExecutionModel for InOrderPipeline {
    fn tick(
        &mut self,
        regs: &mut RegisterFile,
        mem: &mut dyn Memory,
        stats: &mut SimStats,
    ) -> Result<()> {
        if !self.started {
            self.fetch_pc = regs.pc;
            self.started = true;
        }

        // Bypass sources see the latches as they were at the start of the cycle.
        let prev_ex_mem = self.ex_mem;
        let prev_mem_wb = std::mem::take(&mut self.mem_wb);

        // WB
        Self::writeback(&prev_mem_wb, regs, stats);

        // MEM: on failure EX/MEM keeps the instruction and MEM/WB stays a bubble
        self.mem_wb = memory::access(&prev_ex_mem, mem)?;

        // EX
        if need_stall_load_use(&prev_ex_mem, &self.id_ex) {
            debug!("EX  {:#010x} load-use stall", self.id_ex.pc);
            stats.stalls_load_use += 1;
            self.ex_mem.flush();
            // WB retired the MEM/WB producer this cycle; the load forwards next cycle.
            self.id_ex.rv1 = regs.read(self.id_ex.rs);
            self.id_ex.rv2 = regs.read(self.id_ex.rt);
            return Ok(());
        }
        let ctrl = self.id_ex.ctrl;
        let sources = (
            ctrl.reads_rs().then_some(self.id_ex.rs),
            ctrl.reads_rt().then_some(self.id_ex.rt),
        );
        let out = execute::execute(
            &self.id_ex,
            sources,
            prev_ex_mem.bypass_arch(),
            prev_mem_wb.bypass_arch(),
            stats,
        );
        self.ex_mem = out.ex_mem;
        if let Some(target) = out.redirect {
            self.if_id.flush();
            self.id_ex.flush();
            self.fetch_pc = target;
            stats.flushes += 1;
            return Ok(());
        }

        // ID: reads registers after WB has written them this cycle
        self.id_ex = if self.if_id.valid {
            decode::decode_and_read(self.if_id.pc, self.if_id.inst, regs)
        } else {
            IdEx::default()
        };

        // IF
        self.fetch(mem)
    }

    fn set_fetch_limit(&mut self, limit: Option<u32>) {
        self.fetch_limit = limit;
    }

    fn is_halted(&self, _regs: &RegisterFile) -> bool {
        self.started
            && self.fetch_limit.is_some_and(|limit| self.fetch_pc >= limit)
            && self.if_id.is_empty()
            && self.id_ex.is_empty()
            && self.ex_mem.is_empty()
            && self.mem_wb.is_empty()
    }
}

//! Out-of-order engine.
//!
//! Single-issue dynamic scheduling over a physical register file:
//! - **Fetch** fills a bounded instruction queue.
//! - **Decode** pops one instruction per cycle. After a branch or jump it waits
//!   until that instruction resolves, so nothing is ever fetched down a wrong
//!   path past rename.
//! - **Rename** ([`rename`]) maps sources through the [`Rat`], allocates from the
//!   [`FreeList`], appends to the ROB and fills a reservation station.
//! - **Issue/Execute** ([`issue`]) picks the oldest ready station.
//! - **Memory** is shared with the in-order pipeline.
//! - **Writeback/Commit** ([`commit`]) complete out of order and retire in order.
//!
//! Stages run commit first and fetch last, so each consumes what its
//! predecessor produced in the previous cycle.

/// Writeback and in-order commit.
pub mod commit;
/// Bounded fetch queue.
pub mod fetch_queue;
/// Physical register free list.
pub mod free_list;
/// Station selection and execute.
pub mod issue;
/// Physical register file.
pub mod prf;
/// Register alias table.
pub mod rat;
/// Rename stage.
pub mod rename;
/// Reservation stations.
pub mod stations;

use std::collections::BTreeSet;

use tracing::trace;

use self::fetch_queue::{FetchQueue, FetchedInst};
use self::free_list::FreeList;
use self::prf::PhysRegFile;
use self::rat::Rat;
use self::stations::ReservationStations;
use crate::common::constants::WORD_BYTES;
use crate::common::error::Result;
use crate::common::{PhysReg, RegisterFile};
use crate::config::OooConfig;
use crate::core::pipeline::backend::shared::{decode, memory};
use crate::core::pipeline::engine::ExecutionModel;
use crate::core::pipeline::latches::{ExMem, IdEx, MemWb};
use crate::core::pipeline::rob::Rob;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::disasm::disassemble;
use crate::soc::traits::Memory;
use crate::stats::SimStats;

/// Out-of-order engine state.
#[derive(Debug)]
pub struct OooEngine {
    fetch_queue: FetchQueue,
    /// Decode -> Rename latch.
    decoded: Option<IdEx>,
    rat: Rat,
    free_list: FreeList,
    prf: PhysRegFile,
    rob: Rob,
    stations: ReservationStations,
    ex_mem: ExMem,
    mem_wb: MemWb,
    fetch_pc: u32,
    /// A decoded branch or jump has not executed yet.
    control_pending: bool,
    next_seq: u64,
    started: bool,
    fetch_limit: Option<u32>,
}

impl OooEngine {
    /// Creates an engine sized by `config`.
    pub fn new(config: &OooConfig) -> Self {
        Self {
            fetch_queue: FetchQueue::new(config.fetch_queue_size),
            decoded: None,
            rat: Rat::new(),
            free_list: FreeList::new(config.phys_regs),
            prf: PhysRegFile::new(config.phys_regs),
            rob: Rob::new(config.rob_size),
            stations: ReservationStations::new(config.reservation_stations),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            fetch_pc: 0,
            control_pending: false,
            next_seq: 0,
            started: false,
            fetch_limit: None,
        }
    }

    /// Register alias table.
    pub const fn rat(&self) -> &Rat {
        &self.rat
    }

    /// Free list.
    pub const fn free_list(&self) -> &FreeList {
        &self.free_list
    }

    /// Physical register file.
    pub const fn prf(&self) -> &PhysRegFile {
        &self.prf
    }

    /// Reorder buffer.
    pub const fn rob(&self) -> &Rob {
        &self.rob
    }

    /// Reservation stations.
    pub const fn stations(&self) -> &ReservationStations {
        &self.stations
    }

    /// Instruction fetch queue.
    pub const fn fetch_queue(&self) -> &FetchQueue {
        &self.fetch_queue
    }

    /// Decode -> Rename latch.
    pub const fn decoded(&self) -> Option<&IdEx> {
        self.decoded.as_ref()
    }

    /// Address of the next fetch.
    pub const fn fetch_pc(&self) -> u32 {
        self.fetch_pc
    }

    /// Physical registers referenced by the RAT or by an in-flight ROB entry
    /// (its allocated register or the one it displaced).
    pub fn live_phys_regs(&self) -> BTreeSet<PhysReg> {
        let mut live: BTreeSet<PhysReg> = self.rat.iter().collect();
        self.rob.for_each_valid(|entry| {
            if let Some(dest) = entry.dest {
                let _ = live.insert(dest.phys);
                let _ = live.insert(dest.prev);
            }
        });
        live
    }

    /// Every physical register is either free or live, never both, never neither.
    pub fn conservation_holds(&self) -> bool {
        let live = self.live_phys_regs();
        let free: BTreeSet<PhysReg> = self.free_list.iter().collect();
        free.len() == self.free_list.len()
            && free.is_disjoint(&live)
            && free.len() + live.len() == self.prf.len()
    }

    fn fetch_stopped(&self) -> bool {
        self.fetch_limit.is_some_and(|limit| self.fetch_pc >= limit)
    }

    fn decode_stage(&mut self) {
        if self.decoded.is_some() || self.control_pending {
            return;
        }
        let Some(FetchedInst { pc, inst }) = self.fetch_queue.pop() else {
            return;
        };
        let id = decode::decode_fields(pc, inst);
        if id.ctrl.is_control_flow() {
            self.control_pending = true;
        }
        self.decoded = Some(id);
    }

    fn fetch_stage(&mut self, mem: &mut dyn Memory, stats: &mut SimStats) -> Result<()> {
        if self.fetch_stopped() {
            return Ok(());
        }
        if self.fetch_queue.is_full() {
            stats.stalls_fetch_queue += 1;
            return Ok(());
        }
        let inst = mem.read_word(self.fetch_pc)?;
        trace!("IF  {:#010x} {}", self.fetch_pc, disassemble(inst));
        let _ = self.fetch_queue.push(FetchedInst {
            pc: self.fetch_pc,
            inst,
        });
        self.fetch_pc = self.fetch_pc.wrapping_add(WORD_BYTES);
        Ok(())
    }
}

impl ExecutionModel for OooEngine {
    fn tick(
        &mut self,
        regs: &mut RegisterFile,
        mem: &mut dyn Memory,
        stats: &mut SimStats,
    ) -> Result<()> {
        if !self.started {
            self.prf.seed(regs, &self.rat);
            self.fetch_pc = regs.pc;
            self.started = true;
        }

        let prev_ex_mem = self.ex_mem;
        let prev_mem_wb = std::mem::take(&mut self.mem_wb);

        self.commit_stage(regs, stats)?;
        self.writeback_stage(&prev_mem_wb, stats);

        // On failure EX/MEM keeps the instruction for the retry.
        self.mem_wb = memory::access(&prev_ex_mem, mem)?;

        let redirected = self.execute_stage(&prev_ex_mem, &prev_mem_wb, stats);
        self.rename_stage(stats);
        self.decode_stage();
        if redirected {
            return Ok(());
        }
        self.fetch_stage(mem, stats)
    }

    fn set_fetch_limit(&mut self, limit: Option<u32>) {
        self.fetch_limit = limit;
    }

    fn is_halted(&self, _regs: &RegisterFile) -> bool {
        self.started
            && self.fetch_stopped()
            && self.fetch_queue.is_empty()
            && self.decoded.is_none()
            && self.rob.is_empty()
            && self.ex_mem.is_empty()
            && self.mem_wb.is_empty()
    }
}

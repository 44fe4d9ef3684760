//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the simulator. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Stalls:** Load-use, rename, and fetch-queue stall counts.
//! 3. **Control flow:** Pipeline flushes caused by taken branches and jumps.
//! 4. **Forwarding:** Operands bypassed from EX/MEM and MEM/WB.
//! 5. **Commit log:** Optional record of retirement (and completion) order.

use serde::Serialize;

/// One retired or completed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CommitRecord {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Architectural register it wrote, if any.
    pub dest: Option<usize>,
}

/// Retirement and completion order, recorded when enabled.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CommitLog {
    /// Whether records are being collected.
    pub enabled: bool,
    /// Instructions in the order they retired.
    pub commits: Vec<CommitRecord>,
    /// Instructions in the order their results were written back.
    /// Only the out-of-order engine completes separately from commit.
    pub completions: Vec<CommitRecord>,
}

impl CommitLog {
    /// Records a retired instruction.
    pub fn commit(&mut self, pc: u32, dest: Option<usize>) {
        if self.enabled {
            self.commits.push(CommitRecord { pc, dest });
        }
    }

    /// Records a completed (written back) instruction.
    pub fn complete(&mut self, pc: u32, dest: Option<usize>) {
        if self.enabled {
            self.completions.push(CommitRecord { pc, dest });
        }
    }

    /// PCs in retirement order.
    pub fn commit_pcs(&self) -> Vec<u32> {
        self.commits.iter().map(|r| r.pc).collect()
    }

    /// PCs in completion order.
    pub fn completion_pcs(&self) -> Vec<u32> {
        self.completions.iter().map(|r| r.pc).collect()
    }
}

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions committed (retired).
    pub instructions_retired: u64,

    /// Cycles lost to load-use hazards in the in-order pipeline.
    pub stalls_load_use: u64,
    /// Cycles rename waited on a free physical register, ROB slot, or station.
    pub stalls_rename: u64,
    /// Cycles fetch waited on a full instruction queue.
    pub stalls_fetch_queue: u64,

    /// Pipeline flushes caused by taken branches and jumps.
    pub flushes: u64,

    /// Operands bypassed from the EX/MEM latch.
    pub forwards_ex_mem: u64,
    /// Operands bypassed from the MEM/WB latch.
    pub forwards_mem_wb: u64,

    /// Retirement order.
    pub commit_log: CommitLog,
}

impl SimStats {
    /// Creates empty statistics, collecting the commit log if requested.
    pub fn new(commit_log: bool) -> Self {
        Self {
            commit_log: CommitLog {
                enabled: commit_log,
                ..CommitLog::default()
            },
            ..Self::default()
        }
    }

    /// Instructions per cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Cycles per instruction.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints a summary to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("MIPS SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {:.4}", self.ipc());
        println!("sim_cpi                  {:.4}", self.cpi());
        println!("----------------------------------------------------------");
        println!("STALLS");
        println!("  stall.load_use         {}", self.stalls_load_use);
        println!("  stall.rename           {}", self.stalls_rename);
        println!("  stall.fetch_queue      {}", self.stalls_fetch_queue);
        println!("  flushes                {}", self.flushes);
        println!("FORWARDING");
        println!("  fwd.ex_mem             {}", self.forwards_ex_mem);
        println!("  fwd.mem_wb             {}", self.forwards_mem_wb);
        println!("==========================================================");
    }
}

//! Physical register file.
//!
//! The value store of the out-of-order engine. Writeback fills a register and
//! marks it ready; rename marks a newly allocated register pending. The
//! architectural register file is only a view of it, updated at commit.

use crate::common::constants::NUM_ARCH_REGS;
use crate::common::{PhysReg, RegisterFile};
use crate::core::pipeline::backend::o3::rat::Rat;

/// Physical register values with ready bits.
#[derive(Clone, Debug)]
pub struct PhysRegFile {
    values: Vec<u32>,
    ready: Vec<bool>,
}

impl PhysRegFile {
    /// Creates `total` ready registers holding zero.
    pub fn new(total: usize) -> Self {
        let total = total.max(NUM_ARCH_REGS);
        Self {
            values: vec![0; total],
            ready: vec![true; total],
        }
    }

    /// Number of physical registers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; a file holds at least the 32 architectural mappings.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copies the architectural registers into the registers the RAT maps them to.
    pub fn seed(&mut self, regs: &RegisterFile, rat: &Rat) {
        for arch in 0..NUM_ARCH_REGS {
            let phys = rat.lookup(arch);
            self.values[phys.index()] = regs.read(arch);
            self.ready[phys.index()] = true;
        }
    }

    /// Current value of `phys`.
    #[inline]
    pub fn read(&self, phys: PhysReg) -> u32 {
        self.values[phys.index()]
    }

    /// Whether `phys` holds its final value.
    #[inline]
    pub fn is_ready(&self, phys: PhysReg) -> bool {
        self.ready[phys.index()]
    }

    /// Writes `phys` and marks it ready.
    pub fn write(&mut self, phys: PhysReg, value: u32) {
        self.values[phys.index()] = value;
        self.ready[phys.index()] = true;
    }

    /// Marks `phys` as awaiting a producer.
    pub fn mark_pending(&mut self, phys: PhysReg) {
        self.ready[phys.index()] = false;
    }
}

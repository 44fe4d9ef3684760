//! Register File and Register Index Types.
//!
//! This module provides:
//! 1. **Architectural State:** [`RegisterFile`], the 32 GPRs plus the program counter.
//! 2. **Physical Register Index:** [`PhysReg`], a typed index into the out-of-order
//!    engine's physical register file. It cannot be built from an architectural
//!    register number outside this crate.

use std::fmt;

use crate::core::arch::gpr::Gpr;

/// Architectural register file: general-purpose registers and the program counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
    /// Current program counter.
    pub pc: u32,
}

impl RegisterFile {
    /// Creates a register file with every register and the PC at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register. `r0` always reads 0.
    pub fn read(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Writes a general-purpose register. Writes to `r0` are ignored.
    pub fn write(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
    }

    /// Reads two source registers and optionally writes one destination.
    ///
    /// The reads observe the state before the write.
    pub fn access(&mut self, rs: usize, rt: usize, write: Option<(usize, u32)>) -> (u32, u32) {
        let values = (self.read(rs), self.read(rt));
        if let Some((rd, val)) = write {
            self.write(rd, val);
        }
        values
    }

    /// Returns a snapshot of all 32 general-purpose registers.
    pub fn snapshot(&self) -> [u32; 32] {
        self.gpr.snapshot()
    }

    /// Dumps the register file to stdout.
    pub fn dump(&self) {
        println!("pc ={:#010x}", self.pc);
        print!("{}", self.gpr);
    }
}

/// Index of a physical register in the out-of-order engine.
///
/// Only the engine's rename structures mint these, so a `PhysReg` always names a
/// register that exists in the physical file it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhysReg(u16);

impl PhysReg {
    pub(crate) const fn new(idx: u16) -> Self {
        Self(idx)
    }

    /// Position of this register in the physical file.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PhysReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

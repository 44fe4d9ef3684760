//! Register Alias Table (RAT).
//!
//! Maps each architectural register to the physical register holding its
//! newest value. Initially `r -> p(r)`. Only rename mutates it; `r0` is never
//! remapped, so it always resolves to `p0`, which holds zero.

use crate::common::PhysReg;
use crate::common::constants::NUM_ARCH_REGS;

/// Register alias table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rat {
    map: [PhysReg; NUM_ARCH_REGS],
}

impl Default for Rat {
    fn default() -> Self {
        Self::new()
    }
}

impl Rat {
    /// Identity mapping: architectural register `r` to physical register `r`.
    pub fn new() -> Self {
        Self {
            map: std::array::from_fn(|r| PhysReg::new(r as u16)),
        }
    }

    /// Current mapping of `arch`.
    #[inline]
    pub fn lookup(&self, arch: usize) -> PhysReg {
        self.map[arch]
    }

    /// Points `arch` at `phys` and returns the mapping it replaced.
    pub(crate) fn remap(&mut self, arch: usize, phys: PhysReg) -> PhysReg {
        std::mem::replace(&mut self.map[arch], phys)
    }

    /// Whether any architectural register currently maps to `phys`.
    pub fn maps(&self, phys: PhysReg) -> bool {
        self.map.contains(&phys)
    }

    /// All current mappings, indexed by architectural register.
    pub fn iter(&self) -> impl Iterator<Item = PhysReg> + '_ {
        self.map.iter().copied()
    }
}

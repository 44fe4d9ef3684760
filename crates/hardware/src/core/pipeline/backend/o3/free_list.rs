//! Physical register free list.
//!
//! A FIFO of physical registers not referenced by the RAT or any in-flight
//! ROB entry. It starts with the shadow registers `p32..pN`. Each register
//! leaves by `allocate` and returns exactly once by `release`; a second
//! release is an error.

use std::collections::VecDeque;

use crate::common::PhysReg;
use crate::common::constants::NUM_ARCH_REGS;
use crate::common::error::{Result, SimError};

/// Free physical registers.
#[derive(Clone, Debug)]
pub struct FreeList {
    queue: VecDeque<PhysReg>,
    is_free: Vec<bool>,
}

impl FreeList {
    /// Creates a list holding `p32..p{total}`.
    pub fn new(total: usize) -> Self {
        let total = total.max(NUM_ARCH_REGS);
        let queue: VecDeque<PhysReg> = (NUM_ARCH_REGS..total)
            .map(|i| PhysReg::new(i as u16))
            .collect();
        let mut is_free = vec![false; total];
        for p in &queue {
            is_free[p.index()] = true;
        }
        Self { queue, is_free }
    }

    /// Number of free registers.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when no register can be allocated.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Whether `phys` is currently free.
    pub fn contains(&self, phys: PhysReg) -> bool {
        self.is_free.get(phys.index()).copied().unwrap_or(false)
    }

    /// Iterates over the free registers, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = PhysReg> + '_ {
        self.queue.iter().copied()
    }

    /// Takes the oldest free register.
    pub(crate) fn allocate(&mut self) -> Option<PhysReg> {
        let phys = self.queue.pop_front()?;
        self.is_free[phys.index()] = false;
        Some(phys)
    }

    /// Puts back a register taken by the last `allocate` that was never used.
    pub(crate) fn cancel(&mut self, phys: PhysReg) {
        self.queue.push_front(phys);
        self.is_free[phys.index()] = true;
    }

    /// Returns a register to the list.
    ///
    /// # Errors
    ///
    /// [`SimError::DoubleRelease`] if `phys` is already free.
    pub(crate) fn release(&mut self, phys: PhysReg) -> Result<()> {
        let slot = self
            .is_free
            .get_mut(phys.index())
            .ok_or(SimError::DoubleRelease(phys))?;
        if *slot {
            return Err(SimError::DoubleRelease(phys));
        }
        *slot = true;
        self.queue.push_back(phys);
        Ok(())
    }
}

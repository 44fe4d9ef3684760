//! Reservation stations.
//!
//! A fixed pool of slots holding renamed instructions until their sources are
//! available. Writeback wakes up waiting sources by physical register; issue
//! selects the oldest candidate by program-order sequence number. Memory
//! operations never overtake an older memory operation.

use crate::common::PhysReg;
use crate::core::pipeline::latches::IdEx;
use crate::core::pipeline::rob::RobTag;

/// A renamed source operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operand {
    /// Physical register read, or `None` if the instruction does not use it.
    pub phys: Option<PhysReg>,
    /// The register's value is in the physical file.
    pub ready: bool,
}

impl Operand {
    /// An operand the instruction does not read.
    pub const UNUSED: Self = Self {
        phys: None,
        ready: true,
    };

    /// Ready now, or its producer is on a bypass path this cycle.
    fn available(&self, bypassable: &impl Fn(PhysReg) -> bool) -> bool {
        self.ready || self.phys.is_some_and(bypassable)
    }
}

/// An occupied reservation station.
#[derive(Clone, Copy, Debug)]
pub struct StationEntry {
    /// Decoded instruction; operand values are read at issue.
    pub op: IdEx,
    /// Source `rs`.
    pub src1: Operand,
    /// Source `rt`.
    pub src2: Operand,
    /// Destination physical register.
    pub dest: Option<PhysReg>,
    /// Back-reference to the ROB entry.
    pub rob_tag: RobTag,
    /// Program-order sequence number.
    pub seq: u64,
}

impl StationEntry {
    fn is_mem(&self) -> bool {
        self.op.ctrl.is_mem()
    }
}

/// Pool of reservation stations. A slot is busy while it holds `Some`.
#[derive(Clone, Debug)]
pub struct ReservationStations {
    slots: Vec<Option<StationEntry>>,
}

impl ReservationStations {
    /// Creates `count` free stations.
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![None; count],
        }
    }

    /// Number of stations.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of busy stations.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True if every station is free.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Index of a free station, if any.
    pub fn free_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// True if no station is free.
    pub fn is_full(&self) -> bool {
        self.free_slot().is_none()
    }

    /// Busy stations in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &StationEntry> {
        self.slots.iter().flatten()
    }

    /// Occupies `slot`, which must have come from [`Self::free_slot`].
    pub(crate) fn fill(&mut self, slot: usize, entry: StationEntry) {
        self.slots[slot] = Some(entry);
    }

    /// Marks every source waiting on `phys` ready.
    pub fn wakeup(&mut self, phys: PhysReg) {
        for entry in self.slots.iter_mut().flatten() {
            for src in [&mut entry.src1, &mut entry.src2] {
                if src.phys == Some(phys) {
                    src.ready = true;
                }
            }
        }
    }

    /// Removes and returns the oldest issuable entry.
    ///
    /// An entry is issuable when both sources are ready or `bypassable`. A
    /// memory operation is only issuable if no older memory operation is
    /// still waiting in a station.
    pub(crate) fn select(&mut self, bypassable: impl Fn(PhysReg) -> bool) -> Option<StationEntry> {
        let oldest_mem = self
            .iter()
            .filter(|e| e.is_mem())
            .map(|e| e.seq)
            .min();

        let slot = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|e| (i, e)))
            .filter(|(_, e)| e.src1.available(&bypassable) && e.src2.available(&bypassable))
            .filter(|(_, e)| !e.is_mem() || Some(e.seq) == oldest_mem)
            .min_by_key(|(_, e)| e.seq)
            .map(|(i, _)| i)?;

        self.slots[slot].take()
    }
}

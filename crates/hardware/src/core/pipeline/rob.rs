//! Reorder Buffer (ROB) for in-order commit.
//!
//! The ROB is a circular buffer that tracks in-flight instructions from rename
//! through commit. It provides:
//! 1. **Allocation:** Assigns unique tags to instructions leaving rename, in program order.
//! 2. **Completion:** Marks instructions ready when writeback delivers their result.
//! 3. **In-order Commit:** Retires instructions from the head in program order only.
//! 4. **Ownership Tracking:** Each entry records the physical register it allocated and
//!    the mapping it displaced, which commit returns to the free list.

use crate::common::PhysReg;

/// Unique tag identifying an in-flight instruction in the ROB.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct RobTag(pub u32);

/// Destination of a register-writing instruction after renaming.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenamedDest {
    /// Architectural destination register.
    pub arch: usize,
    /// Physical register allocated at rename.
    pub phys: PhysReg,
    /// Physical register the RAT mapped `arch` to before this instruction.
    pub prev: PhysReg,
}

/// A single entry in the Reorder Buffer.
#[derive(Clone, Debug, Default)]
pub struct RobEntry {
    /// Unique tag for this entry.
    pub tag: RobTag,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Renamed destination, if the instruction writes a nonzero register.
    pub dest: Option<RenamedDest>,
    /// Result has been written back.
    pub ready: bool,
    /// Value delivered at writeback.
    pub value: u32,
    /// Load or store.
    pub is_mem: bool,
    /// Branch or jump.
    pub is_branch: bool,
    /// A taken branch or jump redirected fetch. Recorded only.
    pub mispredicted: bool,
    /// Whether this entry is valid (occupied).
    pub valid: bool,
}

/// Reorder Buffer: circular buffer for in-order commit.
#[derive(Debug)]
pub struct Rob {
    /// Fixed-size entry array.
    entries: Vec<RobEntry>,
    /// Index of the oldest entry (commit point).
    head: usize,
    /// Index where the next entry will be allocated.
    tail: usize,
    /// Number of valid entries.
    count: usize,
    /// Monotonically increasing tag counter.
    next_tag: u32,
}

impl Rob {
    /// Creates a new ROB with the given capacity.
    pub fn new(capacity: usize) -> Self {
        let mut entries = Vec::with_capacity(capacity);
        entries.resize_with(capacity, RobEntry::default);
        Self {
            entries,
            head: 0,
            tail: 0,
            count: 0,
            next_tag: 1,
        }
    }

    /// Returns the ROB capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of occupied entries.
    #[inline]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the ROB is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if the ROB is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.entries.len()
    }

    /// Returns the number of free slots.
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.entries.len() - self.count
    }

    /// Appends a not-ready entry at the tail. Returns `None` if the ROB is full.
    pub fn allocate(
        &mut self,
        pc: u32,
        inst: u32,
        dest: Option<RenamedDest>,
        is_mem: bool,
        is_branch: bool,
    ) -> Option<RobTag> {
        if self.is_full() {
            return None;
        }

        let tag = RobTag(self.next_tag);
        self.next_tag = self.next_tag.wrapping_add(1);
        if self.next_tag == 0 {
            self.next_tag = 1; // skip 0
        }

        self.entries[self.tail] = RobEntry {
            tag,
            pc,
            inst,
            dest,
            ready: false,
            value: 0,
            is_mem,
            is_branch,
            mispredicted: false,
            valid: true,
        };

        self.tail = (self.tail + 1) % self.entries.len();
        self.count += 1;
        Some(tag)
    }

    /// Marks an entry ready with its result value.
    pub fn complete(&mut self, tag: RobTag, value: u32) {
        if let Some(entry) = self.find_entry_mut(tag) {
            entry.ready = true;
            entry.value = value;
        }
    }

    /// Records that the instruction redirected fetch.
    pub fn mark_mispredicted(&mut self, tag: RobTag) {
        if let Some(entry) = self.find_entry_mut(tag) {
            entry.mispredicted = true;
        }
    }

    /// Returns a reference to the head entry (oldest), if the ROB is non-empty.
    pub fn peek_head(&self) -> Option<&RobEntry> {
        if self.count == 0 {
            None
        } else {
            Some(&self.entries[self.head])
        }
    }

    /// Commits (retires) the head entry if it is ready.
    /// Returns `None` if the ROB is empty or the head is still waiting.
    pub fn commit_head(&mut self) -> Option<RobEntry> {
        if self.count == 0 || !self.entries[self.head].ready {
            return None;
        }

        let committed = self.entries[self.head].clone();
        self.entries[self.head].valid = false;
        self.head = (self.head + 1) % self.entries.len();
        self.count -= 1;
        Some(committed)
    }

    /// Iterate over all valid entries from head to tail, calling `f` on each.
    pub fn for_each_valid(&self, mut f: impl FnMut(&RobEntry)) {
        let mut idx = self.head;
        for _ in 0..self.count {
            if self.entries[idx].valid {
                f(&self.entries[idx]);
            }
            idx = (idx + 1) % self.entries.len();
        }
    }

    /// Finds a reference to the entry with the given tag.
    pub fn find_entry(&self, tag: RobTag) -> Option<&RobEntry> {
        let mut idx = self.head;
        for _ in 0..self.count {
            if self.entries[idx].valid && self.entries[idx].tag == tag {
                return Some(&self.entries[idx]);
            }
            idx = (idx + 1) % self.entries.len();
        }
        None
    }

    fn find_entry_mut(&mut self, tag: RobTag) -> Option<&mut RobEntry> {
        let mut idx = self.head;
        for _ in 0..self.count {
            if self.entries[idx].valid && self.entries[idx].tag == tag {
                return Some(&mut self.entries[idx]);
            }
            idx = (idx + 1) % self.entries.len();
        }
        None
    }
}

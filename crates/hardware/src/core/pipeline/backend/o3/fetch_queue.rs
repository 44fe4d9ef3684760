//! Instruction fetch queue.
//!
//! A bounded FIFO between Fetch and Decode. Fetch stalls while it is full.

use std::collections::VecDeque;

/// A fetched, not yet decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchedInst {
    /// Program counter.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
}

/// Bounded instruction queue.
#[derive(Clone, Debug)]
pub struct FetchQueue {
    entries: VecDeque<FetchedInst>,
    capacity: usize,
}

impl FetchQueue {
    /// Creates an empty queue holding at most `capacity` instructions.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of queued instructions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if a push would be refused.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Appends an instruction. Returns `false` when full.
    pub fn push(&mut self, entry: FetchedInst) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries.push_back(entry);
        true
    }

    /// Removes the oldest instruction.
    pub fn pop(&mut self) -> Option<FetchedInst> {
        self.entries.pop_front()
    }

    /// Discards everything (wrong-path instructions after a redirect).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

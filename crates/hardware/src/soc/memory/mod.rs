//! Physical system memory.
//!
//! [`Ram`] maps a zero-initialized block of words at a base address. Accesses
//! outside the block raise [`SimError::MemoryFault`]; word accesses that are not
//! 4-byte aligned raise [`SimError::MisalignedAccess`].

use crate::common::constants::WORD_BYTES;
use crate::common::error::{Result, SimError};
use crate::soc::traits::{ByteOrder, Memory};

/// Flat RAM.
#[derive(Clone, Debug)]
pub struct Ram {
    /// Word storage.
    words: Vec<u32>,
    /// The base address where this memory is mapped.
    base_addr: u32,
    byte_order: ByteOrder,
}

impl Ram {
    /// Creates a zeroed RAM of `size_bytes` (rounded down to whole words) at `base_addr`.
    pub fn new(base_addr: u32, size_bytes: usize) -> Self {
        Self {
            words: vec![0; size_bytes / WORD_BYTES as usize],
            base_addr,
            byte_order: ByteOrder::default(),
        }
    }

    /// Returns `(base_address, size_in_bytes)`.
    pub fn address_range(&self) -> (u32, usize) {
        (self.base_addr, self.words.len() * WORD_BYTES as usize)
    }

    fn index(&self, addr: u32) -> Result<usize> {
        if addr % WORD_BYTES != 0 {
            return Err(SimError::MisalignedAccess { addr });
        }
        let idx = (addr.wrapping_sub(self.base_addr) / WORD_BYTES) as usize;
        if addr < self.base_addr || idx >= self.words.len() {
            return Err(SimError::MemoryFault { addr });
        }
        Ok(idx)
    }
}

impl Memory for Ram {
    fn read_word(&mut self, addr: u32) -> Result<u32> {
        let idx = self.index(addr)?;
        Ok(self.words[idx])
    }

    fn write_word(&mut self, addr: u32, val: u32) -> Result<()> {
        let idx = self.index(addr)?;
        self.words[idx] = val;
        Ok(())
    }

    /// Places the whole image or nothing.
    fn load_words(&mut self, addr: u32, words: &[u32]) -> Result<()> {
        if words.is_empty() {
            return Ok(());
        }
        let (base, size) = self.address_range();
        let end = u64::from(base) + size as u64;
        let last = u64::from(addr) + words.len() as u64 * u64::from(WORD_BYTES);
        if addr < base || last > end {
            let addr = if addr < base || u64::from(addr) >= end {
                addr
            } else {
                u32::try_from(end).unwrap_or(u32::MAX)
            };
            return Err(SimError::MemoryFault { addr });
        }
        let start = self.index(addr)?;
        self.words[start..start + words.len()].copy_from_slice(words);
        Ok(())
    }

    fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    fn set_byte_order(&mut self, order: ByteOrder) {
        self.byte_order = order;
    }
}

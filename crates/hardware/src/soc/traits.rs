//! Memory access trait.
//!
//! This module defines the interface between the execution models and memory. It provides:
//! 1. **Word Access:** Aligned 32-bit reads and writes that report failure as [`SimError`].
//! 2. **Bulk Load:** A default helper for placing a program image.
//! 3. **Byte Order:** Which lane of a word a byte address names. MIPS images
//!    are big-endian unless an ELF header says otherwise.
//!
//! A failed access must leave memory unchanged; models rely on this to retry a cycle.
//!
//! [`SimError`]: crate::common::SimError

use crate::common::error::Result;
use crate::common::constants::WORD_BYTES;

/// Order of the byte lanes within a word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ByteOrder {
    /// Byte `addr & 3 == 0` is the most significant byte.
    #[default]
    Big,
    /// Byte `addr & 3 == 0` is the least significant byte.
    Little,
}

impl ByteOrder {
    /// Bit offset of the `bytes`-wide lane holding `addr` (`bytes` is 1 or 2).
    pub const fn lane_shift(self, addr: u32, bytes: u32) -> u32 {
        let offset = addr & (WORD_BYTES - bytes);
        match self {
            Self::Big => (WORD_BYTES - bytes - offset) * 8,
            Self::Little => offset * 8,
        }
    }
}

/// Word-granular memory seen by the processor.
pub trait Memory {
    /// Reads the aligned word at `addr`.
    fn read_word(&mut self, addr: u32) -> Result<u32>;

    /// Writes the aligned word at `addr`.
    fn write_word(&mut self, addr: u32, val: u32) -> Result<()>;

    /// Lane order used for sub-word accesses.
    fn byte_order(&self) -> ByteOrder {
        ByteOrder::Big
    }

    /// Switches the lane order. Memories with a fixed order ignore this.
    fn set_byte_order(&mut self, _order: ByteOrder) {}

    /// Writes consecutive words starting at `addr`.
    fn load_words(&mut self, addr: u32, words: &[u32]) -> Result<()> {
        let mut at = addr;
        for &word in words {
            self.write_word(at, word)?;
            at = at.wrapping_add(WORD_BYTES);
        }
        Ok(())
    }
}

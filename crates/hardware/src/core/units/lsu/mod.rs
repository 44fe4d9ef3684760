//! Load/Store Unit (LSU).
//!
//! Performs the data-memory access of the Memory stage on top of the word-only
//! [`Memory`] interface:
//! 1. **Loads:** `lw` returns the word; `lhu`/`lbu` return the addressed lane, zero-extended.
//! 2. **Stores:** `sw` writes the word; `sh`/`sb` read the containing word, replace one
//!    lane, and write it back so the other lanes are preserved.
//!
//! Lane order comes from [`Memory::byte_order`]; with the big-endian default the
//! byte at `addr & 3 == 0` occupies bits 31..24. Halfword accesses must be 2-byte aligned. Failed reads abort the access before
//! anything is written.

use crate::common::constants::{BYTE_MASK, HALF_MASK, WORD_BYTES};
use crate::common::error::{Result, SimError};
use crate::core::pipeline::signals::MemWidth;
use crate::soc::traits::{ByteOrder, Memory};

/// Load/Store Unit. Stateless.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Performs a load of `width` at `addr`.
    pub fn load(mem: &mut dyn Memory, addr: u32, width: MemWidth) -> Result<u32> {
        match lane(mem.byte_order(), addr, width)? {
            None => mem.read_word(addr),
            Some((mask, shift)) => {
                let word = mem.read_word(addr & !(WORD_BYTES - 1))?;
                Ok((word >> shift) & mask)
            }
        }
    }

    /// Performs a store of the low `width` bits of `val` at `addr`.
    pub fn store(mem: &mut dyn Memory, addr: u32, width: MemWidth, val: u32) -> Result<()> {
        match lane(mem.byte_order(), addr, width)? {
            None => mem.write_word(addr, val),
            Some((mask, shift)) => {
                let aligned = addr & !(WORD_BYTES - 1);
                let old = mem.read_word(aligned)?;
                let merged = (old & !(mask << shift)) | ((val & mask) << shift);
                mem.write_word(aligned, merged)
            }
        }
    }
}

/// Lane mask and bit offset of a sub-word access; `None` for a full word.
fn lane(order: ByteOrder, addr: u32, width: MemWidth) -> Result<Option<(u32, u32)>> {
    match width {
        MemWidth::Word => Ok(None),
        MemWidth::Half if addr % 2 != 0 => Err(SimError::MisalignedAccess { addr }),
        MemWidth::Half => Ok(Some((HALF_MASK, order.lane_shift(addr, 2)))),
        MemWidth::Byte => Ok(Some((BYTE_MASK, order.lane_shift(addr, 1)))),
    }
}

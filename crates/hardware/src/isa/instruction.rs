//! Instruction encoding and field extraction.
//!
//! Provides bit extraction for the three MIPS32 formats:
//!
//! ```text
//! R: opcode(6) | rs(5) | rt(5) | rd(5) | shamt(5) | funct(6)
//! I: opcode(6) | rs(5) | rt(5) | immediate(16)
//! J: opcode(6) | index(26)
//! ```

use crate::common::constants::{
    IMM_MASK, JUMP_INDEX_MASK, JUMP_REGION_MASK, OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT, REG_MASK,
    RS_SHIFT, RT_SHIFT, SHAMT_SHIFT, WORD_BYTES,
};

/// Extracts MIPS32 instruction fields from a raw encoding.
pub trait InstructionBits {
    /// Primary opcode (bits 31-26).
    fn opcode(&self) -> u32;
    /// First source register (bits 25-21).
    fn rs(&self) -> usize;
    /// Second source, or destination for I-type (bits 20-16).
    fn rt(&self) -> usize;
    /// R-type destination (bits 15-11).
    fn rd(&self) -> usize;
    /// Shift amount (bits 10-6).
    fn shamt(&self) -> u32;
    /// R-type function code (bits 5-0).
    fn funct(&self) -> u32;
    /// Raw 16-bit immediate (bits 15-0).
    fn imm16(&self) -> u32;
    /// 26-bit jump index (bits 25-0).
    fn jump_index(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn jump_index(&self) -> u32 {
        self & JUMP_INDEX_MASK
    }
}

/// Extends a 16-bit immediate to 32 bits.
///
/// # Examples
///
/// ```
/// use mipsim_core::isa::instruction::extend_imm;
///
/// assert_eq!(extend_imm(0xFFFF, false), 0xFFFF_FFFF);
/// assert_eq!(extend_imm(0xFFFF, true), 0x0000_FFFF);
/// ```
#[inline]
pub const fn extend_imm(imm16: u32, zero_extend: bool) -> u32 {
    if zero_extend {
        imm16 & IMM_MASK
    } else {
        (imm16 as u16 as i16) as i32 as u32
    }
}

/// Absolute target of `j`/`jal`: the region bits of `pc + 4` joined with the word index.
#[inline]
pub const fn jump_target(pc: u32, index: u32) -> u32 {
    (pc.wrapping_add(WORD_BYTES) & JUMP_REGION_MASK) | ((index & JUMP_INDEX_MASK) << 2)
}

/// PC-relative target of `beq`/`bne`: `pc + 4 + (imm << 2)`.
#[inline]
pub const fn branch_target(pc: u32, imm: u32) -> u32 {
    pc.wrapping_add(WORD_BYTES).wrapping_add(imm << 2)
}

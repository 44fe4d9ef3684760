//! Global System Constants.
//!
//! This module defines simulator-wide constants. It includes:
//! 1. **Register Constants:** Architectural register count and well-known indices.
//! 2. **Instruction Constants:** Field masks and shifts for MIPS32 encodings.
//! 3. **Memory Constants:** Word size and sub-word lane masks.

/// Number of architectural general-purpose registers.
pub const NUM_ARCH_REGS: usize = 32;

/// Link register written by `jal`.
pub const LINK_REG: usize = 31;

/// Size of one instruction (and one memory word) in bytes.
pub const WORD_BYTES: u32 = 4;

/// Bit position of the primary opcode field.
pub const OPCODE_SHIFT: u32 = 26;

/// Mask for the 6-bit opcode and function fields.
pub const OPCODE_MASK: u32 = 0x3F;

/// Bit position of the `rs` field.
pub const RS_SHIFT: u32 = 21;

/// Bit position of the `rt` field.
pub const RT_SHIFT: u32 = 16;

/// Bit position of the `rd` field.
pub const RD_SHIFT: u32 = 11;

/// Bit position of the shift amount field.
pub const SHAMT_SHIFT: u32 = 6;

/// Mask for 5-bit register and shift amount fields.
pub const REG_MASK: u32 = 0x1F;

/// Mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;

/// Mask for the 26-bit jump index field.
pub const JUMP_INDEX_MASK: u32 = 0x03FF_FFFF;

/// Region bits of `pc + 4` retained by absolute jumps.
pub const JUMP_REGION_MASK: u32 = 0xF000_0000;

/// Lane mask for byte loads and stores.
pub const BYTE_MASK: u32 = 0x0000_00FF;

/// Lane mask for halfword loads and stores.
pub const HALF_MASK: u32 = 0x0000_FFFF;

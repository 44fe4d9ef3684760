//! MIPS32 Primary Opcodes.
//!
//! Defines the major opcodes (bits 31-26). All register-register
//! instructions share [`OP_SPECIAL`] and are told apart by their function code.

/// Register-register instructions (ADD, SUB, SLL, JR, etc.).
pub const OP_SPECIAL: u32 = 0x00;

/// Jump (J).
pub const OP_J: u32 = 0x02;
/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0x03;
/// Branch on Equal (BEQ).
pub const OP_BEQ: u32 = 0x04;
/// Branch on Not Equal (BNE).
pub const OP_BNE: u32 = 0x05;

/// Add Immediate (ADDI).
pub const OP_ADDI: u32 = 0x08;
/// Add Immediate Unsigned (ADDIU).
pub const OP_ADDIU: u32 = 0x09;
/// Set on Less Than Immediate (SLTI).
pub const OP_SLTI: u32 = 0x0A;
/// Set on Less Than Immediate Unsigned (SLTIU).
pub const OP_SLTIU: u32 = 0x0B;
/// AND Immediate (ANDI).
pub const OP_ANDI: u32 = 0x0C;
/// OR Immediate (ORI).
pub const OP_ORI: u32 = 0x0D;
/// XOR Immediate (XORI).
pub const OP_XORI: u32 = 0x0E;
/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0x0F;

/// Load Word (LW).
pub const OP_LW: u32 = 0x23;
/// Load Byte Unsigned (LBU).
pub const OP_LBU: u32 = 0x24;
/// Load Halfword Unsigned (LHU).
pub const OP_LHU: u32 = 0x25;
/// Store Byte (SB).
pub const OP_SB: u32 = 0x28;
/// Store Halfword (SH).
pub const OP_SH: u32 = 0x29;
/// Store Word (SW).
pub const OP_SW: u32 = 0x2B;

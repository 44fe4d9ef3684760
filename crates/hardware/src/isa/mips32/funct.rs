//! MIPS32 R-type Function Codes.
//!
//! The function field (bits 5-0) selects the operation for [`super::opcodes::OP_SPECIAL`].

/// Shift Left Logical.
pub const SLL: u32 = 0x00;
/// Shift Right Logical.
pub const SRL: u32 = 0x02;
/// Shift Right Arithmetic.
pub const SRA: u32 = 0x03;
/// Jump Register.
pub const JR: u32 = 0x08;
/// Add.
pub const ADD: u32 = 0x20;
/// Add Unsigned.
pub const ADDU: u32 = 0x21;
/// Subtract.
pub const SUB: u32 = 0x22;
/// Subtract Unsigned.
pub const SUBU: u32 = 0x23;
/// Bitwise AND.
pub const AND: u32 = 0x24;
/// Bitwise OR.
pub const OR: u32 = 0x25;
/// Bitwise XOR.
pub const XOR: u32 = 0x26;
/// Bitwise NOR.
pub const NOR: u32 = 0x27;
/// Set on Less Than.
pub const SLT: u32 = 0x2A;
/// Set on Less Than Unsigned.
pub const SLTU: u32 = 0x2B;

//! ALU shift operations.
//!
//! Operand `a` carries the shift amount (the instruction's `shamt` field) and
//! operand `b` the value being shifted. Only the low 5 bits of `a` are used.

use crate::core::pipeline::signals::AluOp;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation. Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    let sh = a & SHAMT_MASK;
    match op {
        AluOp::Sll => b << sh,
        AluOp::Srl => b >> sh,
        AluOp::Sra => ((b as i32) >> sh) as u32,
        _ => 0,
    }
}

//! ALU bitwise and comparison operations.

use crate::core::pipeline::signals::AluOp;

/// Executes a logic or set-less-than operation. Returns `0` for other opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Nor => !(a | b),
        AluOp::Slt => ((a as i32) < (b as i32)) as u32,
        AluOp::Sltu => (a < b) as u32,
        _ => 0,
    }
}

//! ALU arithmetic operations.
//!
//! All arithmetic wraps; the simulator does not raise overflow exceptions, so
//! `add`/`addu` and `sub`/`subu` behave identically.

use crate::core::pipeline::signals::AluOp;

/// Executes an arithmetic operation. Returns `0` for other opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Lui => b << 16,
        _ => 0,
    }
}

//! Pipelined execution models.
//!
//! This module contains the in-order five-stage pipeline and the out-of-order
//! engine, plus the pieces they share:
//! 1. **Hazards:** Load-use detection and operand forwarding.
//! 2. **Latches:** Inter-stage buffers (IF/ID, ID/EX, EX/MEM, MEM/WB).
//! 3. **Signals:** Control signals generated during instruction decoding.
//! 4. **ROB:** Reorder buffer for in-order commit.
//! 5. **Engine:** The `ExecutionModel` trait and optimization-level dispatch.

/// In-order and out-of-order stage implementations.
pub mod backend;

/// Execution model trait and dispatch.
pub mod engine;

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Reorder buffer.
pub mod rob;

/// Control signals generated during instruction decode.
pub mod signals;

/// Traits for pipeline latches.
pub mod traits;

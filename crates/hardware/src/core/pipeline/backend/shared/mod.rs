//! Stage bodies shared by the in-order pipeline and the out-of-order engine.
//!
//! These are free functions over latches: they hold no state of their own.

/// Decode: field extraction, immediate extension, targets, destination select.
pub mod decode;
/// Execute: operand forwarding, ALU, branch and jump resolution.
pub mod execute;
/// Memory: loads and stores through the LSU.
pub mod memory;

//! MIPS32 integer instruction set subset.
//!
//! Encodings for the register, immediate, branch, jump, and load/store
//! instructions executed by every model.

/// Primary opcode values (bits 31-26).
pub mod opcodes;

/// R-type function codes (bits 5-0).
pub mod funct;

//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains opcode tables, field extraction, the control-signal decoder, and a
//! disassembler for the MIPS32 integer subset.

/// ABI register names.
pub mod abi;

/// Control-signal decoder.
pub mod decode;

/// Instruction disassembler for trace output.
pub mod disasm;

/// Instruction field extraction and decoded instruction fields.
pub mod instruction;

/// MIPS32 opcode and function code tables.
pub mod mips32;

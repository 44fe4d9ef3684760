//! MIPS32 processor simulator library.
//!
//! This crate implements an instruction-level MIPS simulator with three
//! interchangeable execution models:
//! 1. **Single-cycle:** A functional model executing one instruction per step.
//! 2. **In-order pipeline:** Five stages with load-use stalls, EX/MEM and MEM/WB
//!    forwarding, and flush on taken branches.
//! 3. **Out-of-order engine:** Register renaming over a physical register file,
//!    reservation stations, and a reorder buffer with in-order commit.
//!
//! All three run against the same collaborators (register file, memory, ALU,
//! decoder) and must leave identical architectural state for any program.

/// Common types and constants (errors, registers, physical register indices).
pub mod common;
/// Simulator configuration (defaults, optimization level, resource sizes).
pub mod config;
/// Execution models, pipeline machinery, and datapath units.
pub mod core;
/// Instruction set (decode, fields, disassembly, register names).
pub mod isa;
/// Simulator driver and program loader.
pub mod sim;
/// Memory trait and RAM.
pub mod soc;
/// Simulation statistics and commit log.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::{Config, OptLevel};
/// Crate-wide error and result types.
pub use crate::common::{Result, SimError};
/// Top-level simulator; construct with `Simulator::from_config`.
pub use crate::sim::Simulator;

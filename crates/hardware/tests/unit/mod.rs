//! # Unit Components
//!
//! Tests organized by component: the execution models and their hazard
//! handling, the ISA helpers, configuration, loading, and memory failure
//! behavior. `oracle` checks that all three models agree.

/// Configuration parsing and validation.
pub mod config;

/// Execution models: pipeline hazards, out-of-order structures, sub-word access.
pub mod core;

/// Decoder and disassembler.
pub mod isa;

/// Failing memory: aborted cycles and exact retry.
pub mod memory_faults;

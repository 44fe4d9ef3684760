//! Execution units and functional components.
//!
//! This module contains the stateless datapath units shared by every execution
//! model: the integer ALU and the load/store unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Load/Store Unit for sub-word memory access.
pub mod lsu;

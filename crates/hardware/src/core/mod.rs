//! Core processor implementation.
//!
//! This module contains the three execution models and the components they
//! are built from: architectural register storage, the pipeline machinery,
//! and the datapath units.

/// Architectural register storage.
pub mod arch;

/// Pipelined models, latches, hazards, and model dispatch.
pub mod pipeline;

/// Single-cycle functional model.
pub mod single_cycle;

/// Execution units (ALU, LSU).
pub mod units;

pub use self::pipeline::engine::{ExecutionModel, ModelDispatch};

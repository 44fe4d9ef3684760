//! Architectural state.
//!
//! Holds the programmer-visible register storage shared by all execution models.

/// General-purpose register storage.
pub mod gpr;

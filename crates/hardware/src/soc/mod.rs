//! System-on-Chip (SoC) Components.
//!
//! The memory side of the simulated machine: the [`Memory`] access trait that
//! every execution model is written against, and [`Ram`], the flat word-addressed
//! memory used by the CLI and the tests.

/// Flat RAM implementation.
pub mod memory;

/// Memory access trait.
pub mod traits;

pub use memory::Ram;
pub use traits::{ByteOrder, Memory};

//! Common utilities and types used throughout the MIPS simulator.
//!
//! This module provides the building blocks shared by every execution model:
//! 1. **Constants:** Register counts, instruction field masks, and reset values.
//! 2. **Error Handling:** The crate-wide [`SimError`] and [`Result`] alias.
//! 3. **Register Management:** The architectural [`RegisterFile`] and the typed
//!    physical register index [`PhysReg`].

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

/// Register file and register index types.
pub mod reg;

pub use error::{Result, SimError};
pub use reg::{PhysReg, RegisterFile};

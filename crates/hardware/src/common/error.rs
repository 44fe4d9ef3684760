//! Simulator error definitions.
//!
//! This module defines the error type shared by every component of the simulator. It covers:
//! 1. **Memory Faults:** Out-of-range and misaligned accesses reported by the memory collaborator.
//! 2. **Resource Ownership:** Violations of the physical register free list / RAT / ROB protocol.
//! 3. **Setup Errors:** Invalid configuration, optimization level, or program image.
//!
//! Stalls and flushes are ordinary pipeline control flow and never surface as errors.

use thiserror::Error;

use super::reg::PhysReg;

/// Errors raised while configuring or stepping a simulated processor.
#[derive(Debug, Error)]
pub enum SimError {
    /// The address is outside every mapped region.
    #[error("memory access fault at {addr:#010x}")]
    MemoryFault {
        /// Faulting byte address.
        addr: u32,
    },

    /// Word accesses must be 4-byte aligned.
    #[error("misaligned word access at {addr:#010x}")]
    MisalignedAccess {
        /// Faulting byte address.
        addr: u32,
    },

    /// The optimization level does not name an execution model.
    #[error("unrecognized optimization level {0} (expected 0, 1 or 2)")]
    InvalidOptLevel(u8),

    /// A physical register was returned to the free list while already free.
    #[error("physical register {0} released twice")]
    DoubleRelease(PhysReg),

    /// A physical register was released while the RAT still maps it.
    #[error("physical register {0} released while still mapped by the RAT")]
    ReleaseWhileMapped(PhysReg),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Malformed JSON configuration.
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The program image could not be parsed or placed in memory.
    #[error("failed to load program: {0}")]
    Loader(String),

    /// I/O failure while reading an input file.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used across the simulator.
pub type Result<T> = std::result::Result<T, SimError>;

//! Simulation driver and program loading.
//!
//! Provides the [`Simulator`] that owns architectural state, memory and the
//! selected execution model, and the loader that turns files into images.

/// Program image parsing (ELF, hex, raw).
pub mod loader;
/// Top-level simulator.
pub mod simulator;

pub use loader::{ProgramImage, Segment, load_file, load_image};
pub use simulator::Simulator;

//! Configuration system for the MIPS simulator.
//!
//! This module defines all configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline memory map and out-of-order resource sizes.
//! 2. **Structures:** Hierarchical config for general, memory, and out-of-order settings.
//! 3. **Enums:** The optimization level selecting the execution model.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.
//! Every field has a default, so a partial document only overrides what it names.

use serde::Deserialize;

use crate::common::error::{Result, SimError};

/// Default configuration constants for the simulator.
mod defaults {
    /// Base address of RAM.
    pub const RAM_BASE: u32 = 0x0000_0000;

    /// Size of RAM (1 MiB).
    pub const RAM_SIZE: usize = 1024 * 1024;

    /// Physical registers in the out-of-order engine: 32 architectural plus 32 shadow.
    pub const PHYS_REGS: usize = 64;

    /// Instruction fetch queue depth.
    pub const FETCH_QUEUE_SIZE: usize = 16;

    /// Reservation station count.
    pub const RESERVATION_STATIONS: usize = 8;

    /// Reorder buffer entries.
    pub const ROB_SIZE: usize = 32;
}

/// Optimization level: selects which execution model runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "u8")]
pub enum OptLevel {
    /// Level 0: single-cycle functional model.
    #[default]
    SingleCycle,
    /// Level 1: five-stage in-order pipeline with forwarding.
    Pipelined,
    /// Level 2: out-of-order engine with register renaming.
    OutOfOrder,
}

impl TryFrom<u8> for OptLevel {
    type Error = SimError;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            0 => Ok(Self::SingleCycle),
            1 => Ok(Self::Pipelined),
            2 => Ok(Self::OutOfOrder),
            other => Err(SimError::InvalidOptLevel(other)),
        }
    }
}

impl From<OptLevel> for u8 {
    fn from(level: OptLevel) -> Self {
        match level {
            OptLevel::SingleCycle => 0,
            OptLevel::Pipelined => 1,
            OptLevel::OutOfOrder => 2,
        }
    }
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use mipsim_core::config::{Config, OptLevel};
///
/// let config = Config::default();
/// assert_eq!(config.general.opt_level, OptLevel::SingleCycle);
/// assert_eq!(config.ooo.phys_regs, 64);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use mipsim_core::config::{Config, OptLevel};
///
/// let json = r#"{
///     "general": { "opt_level": 2, "commit_log": true },
///     "memory": { "base": 4096, "size": 65536 },
///     "ooo": { "rob_size": 16 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.opt_level, OptLevel::OutOfOrder);
/// assert_eq!(config.memory.base, 4096);
/// assert_eq!(config.ooo.rob_size, 16);
/// assert_eq!(config.ooo.fetch_queue_size, 16);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory map
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Out-of-order engine resources
    #[serde(default)]
    pub ooo: OooConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks resource sizes.
    pub fn validate(&self) -> Result<()> {
        if self.ooo.phys_regs <= 32 || self.ooo.phys_regs > usize::from(u16::MAX) {
            return Err(SimError::Config(format!(
                "ooo.phys_regs must be in 33..={}, got {}",
                u16::MAX,
                self.ooo.phys_regs
            )));
        }
        for (name, value) in [
            ("ooo.fetch_queue_size", self.ooo.fetch_queue_size),
            ("ooo.reservation_stations", self.ooo.reservation_stations),
            ("ooo.rob_size", self.ooo.rob_size),
            ("memory.size", self.memory.size),
        ] {
            if value == 0 {
                return Err(SimError::Config(format!("{name} must be nonzero")));
            }
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Execution model: 0 single-cycle, 1 pipelined, 2 out-of-order.
    #[serde(default)]
    pub opt_level: OptLevel,

    /// Log each retired instruction, disassembled, at `info` level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC for images that carry no entry point (defaults to RAM base).
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,

    /// Record retirement order in [`crate::stats::CommitLog`].
    #[serde(default)]
    pub commit_log: bool,
}

impl GeneralConfig {
    fn default_start_pc() -> u32 {
        defaults::RAM_BASE
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            opt_level: OptLevel::default(),
            trace_instructions: false,
            start_pc: Self::default_start_pc(),
            commit_log: false,
        }
    }
}

/// Main memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Base address of RAM.
    #[serde(default = "MemoryConfig::default_base")]
    pub base: u32,
    /// Size of RAM in bytes.
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,
}

impl MemoryConfig {
    fn default_base() -> u32 {
        defaults::RAM_BASE
    }

    fn default_size() -> usize {
        defaults::RAM_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            base: Self::default_base(),
            size: Self::default_size(),
        }
    }
}

/// Out-of-order engine resource sizes.
#[derive(Debug, Clone, Deserialize)]
pub struct OooConfig {
    /// Total physical registers, including the 32 initially mapped by the RAT.
    #[serde(default = "OooConfig::default_phys_regs")]
    pub phys_regs: usize,
    /// Instruction fetch queue depth.
    #[serde(default = "OooConfig::default_fetch_queue_size")]
    pub fetch_queue_size: usize,
    /// Number of reservation stations.
    #[serde(default = "OooConfig::default_reservation_stations")]
    pub reservation_stations: usize,
    /// Reorder buffer entries.
    #[serde(default = "OooConfig::default_rob_size")]
    pub rob_size: usize,
}

impl OooConfig {
    fn default_phys_regs() -> usize {
        defaults::PHYS_REGS
    }

    fn default_fetch_queue_size() -> usize {
        defaults::FETCH_QUEUE_SIZE
    }

    fn default_reservation_stations() -> usize {
        defaults::RESERVATION_STATIONS
    }

    fn default_rob_size() -> usize {
        defaults::ROB_SIZE
    }
}

impl Default for OooConfig {
    fn default() -> Self {
        Self {
            phys_regs: Self::default_phys_regs(),
            fetch_queue_size: Self::default_fetch_queue_size(),
            reservation_stations: Self::default_reservation_stations(),
            rob_size: Self::default_rob_size(),
        }
    }
}

//! MIPS General-Purpose Register File.
//!
//! This module implements the 32 general-purpose registers of the MIPS32 architecture.
//! It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`r0`-`r31`).
//! 2. **Invariant Enforcement:** Ensures that register `r0` is hardwired to zero.
//! 3. **Debugging:** Formats the complete register state for dumps.

use std::fmt;

/// General-Purpose Register file.
///
/// Register `r0` is hardwired to zero and cannot be modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; 32],
}

impl Gpr {
    /// Creates a register file with all registers at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register. Register `r0` always returns 0.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register. Writes to `r0` are dropped.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Copies out every register.
    pub fn snapshot(&self) -> [u32; 32] {
        self.regs
    }
}

impl fmt::Display for Gpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..32).step_by(4) {
            writeln!(
                f,
                "r{:<2}={:#010x} r{:<2}={:#010x} r{:<2}={:#010x} r{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1],
                i + 2,
                self.regs[i + 2],
                i + 3,
                self.regs[i + 3]
            )?;
        }
        Ok(())
    }
}

//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for maintaining pipeline consistency when data
//! dependencies exist between instructions. It provides:
//! 1. **Hazard Detection:** Identifies load-use hazards that require a one-cycle stall.
//! 2. **Operand Forwarding:** Resolves Read-After-Write (RAW) hazards by bypassing the
//!    register file from the EX/MEM and MEM/WB latches.
//!
//! Forwarding is generic over the register key: the in-order pipeline matches
//! architectural register numbers, the out-of-order engine matches [`PhysReg`]s.
//!
//! [`PhysReg`]: crate::common::PhysReg

use crate::core::pipeline::latches::{ExMem, IdEx};

/// A result available for bypass, tagged with the register it will write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bypass<K> {
    /// Destination register of the producing instruction.
    pub key: K,
    /// Value it will write.
    pub value: u32,
}

/// Where an operand value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardSource {
    /// Read at decode (or from the physical file at issue).
    RegFile,
    /// Bypassed from the EX/MEM latch.
    ExMem,
    /// Bypassed from the MEM/WB latch.
    MemWb,
}

/// Checks if a pipeline stall is needed due to a load-use data hazard.
///
/// A load-use hazard occurs when the instruction about to execute (in ID/EX)
/// reads the register being loaded by the instruction one stage ahead (in EX/MEM).
/// The loaded value is only available after Memory, so Execute waits one cycle and
/// then takes it over the MEM/WB bypass.
///
/// # Arguments
///
/// * `ex_mem` - The EX/MEM latch as it was at the start of the cycle.
/// * `id_ex` - The ID/EX latch holding the instruction about to execute.
///
/// ```text
/// EX/MEM: lw  r1, 0(r2)    <- loads into r1
/// ID/EX:  add r3, r1, r4   <- reads r1: stall one cycle
/// ```
pub const fn need_stall_load_use(ex_mem: &ExMem, id_ex: &IdEx) -> bool {
    if !ex_mem.is_load() || !id_ex.valid {
        return false;
    }
    let dest = ex_mem.write_reg;
    (id_ex.ctrl.reads_rs() && id_ex.rs == dest) || (id_ex.ctrl.reads_rt() && id_ex.rt == dest)
}

/// Forwards a register value from later pipeline stages.
///
/// EX/MEM holds the most recent result and takes priority over MEM/WB.
///
/// # Arguments
///
/// * `src` - Register the operand is read from, or `None` if the operand is unused.
/// * `current` - Value read from the register file.
/// * `ex_mem` - EX/MEM bypass from the start of the cycle.
/// * `mem_wb` - MEM/WB bypass from the start of the cycle.
///
/// # Returns
///
/// The operand value and the path it came from.
///
/// # Examples
///
/// ```
/// use mipsim_core::core::pipeline::hazards::{Bypass, ForwardSource, forward_operand};
///
/// let newer = Some(Bypass { key: 1usize, value: 10 });
/// let older = Some(Bypass { key: 1usize, value: 20 });
/// assert_eq!(forward_operand(Some(1), 0, newer, older), (10, ForwardSource::ExMem));
/// assert_eq!(forward_operand(Some(1), 0, None, older), (20, ForwardSource::MemWb));
/// assert_eq!(forward_operand(Some(2), 7, newer, older), (7, ForwardSource::RegFile));
/// ```
pub fn forward_operand<K: Copy + PartialEq>(
    src: Option<K>,
    current: u32,
    ex_mem: Option<Bypass<K>>,
    mem_wb: Option<Bypass<K>>,
) -> (u32, ForwardSource) {
    let Some(src) = src else {
        return (current, ForwardSource::RegFile);
    };
    if let Some(b) = ex_mem.filter(|b| b.key == src) {
        return (b.value, ForwardSource::ExMem);
    }
    if let Some(b) = mem_wb.filter(|b| b.key == src) {
        return (b.value, ForwardSource::MemWb);
    }
    (current, ForwardSource::RegFile)
}

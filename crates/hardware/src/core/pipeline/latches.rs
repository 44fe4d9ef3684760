//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** Decoded fields, control signals, operands and results.
//! 2. **Renaming Support:** Out-of-order latches additionally carry physical registers
//!    and the ROB tag of the instruction; the in-order pipeline leaves them `None`.
//! 3. **Bypass Sources:** EX/MEM and MEM/WB expose the value they can forward.
//!
//! `Default` is the cleared (bubble) state of every latch.

use crate::common::PhysReg;
use crate::common::constants::WORD_BYTES;
use crate::core::pipeline::hazards::Bypass;
use crate::core::pipeline::rob::RobTag;
use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::traits::PipelineLatch;

/// IF/ID latch (Fetch to Decode).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfId {
    /// Latch holds an instruction.
    pub valid: bool,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
}

/// ID/EX latch (Decode to Execute).
///
/// Holds the decoded fields, the extended immediate, precomputed jump and
/// branch targets, and the operand values read at decode.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdEx {
    /// Latch holds an instruction.
    pub valid: bool,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Primary opcode.
    pub opcode: u32,
    /// First source register index.
    pub rs: usize,
    /// Second source register index.
    pub rt: usize,
    /// R-type destination field.
    pub rd: usize,
    /// Shift amount.
    pub shamt: u32,
    /// R-type function code.
    pub funct: u32,
    /// Sign- or zero-extended immediate.
    pub imm: u32,
    /// Value of `rs` captured at decode.
    pub rv1: u32,
    /// Value of `rt` captured at decode.
    pub rv2: u32,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
    /// Absolute target for `j`/`jal`.
    pub jump_target: u32,
    /// PC-relative target for `beq`/`bne`.
    pub branch_target: u32,
    /// Architectural destination register (`r31` for link, else `rd`/`rt`).
    pub write_reg: usize,
    /// Physical register holding `rs`.
    pub phys_rs: Option<PhysReg>,
    /// Physical register holding `rt`.
    pub phys_rt: Option<PhysReg>,
    /// Physical register allocated for the destination.
    pub phys_dest: Option<PhysReg>,
    /// Reorder buffer entry of the instruction.
    pub rob_tag: Option<RobTag>,
}

impl IdEx {
    /// Return address written by linking jumps.
    pub const fn link_value(&self) -> u32 {
        self.pc.wrapping_add(2 * WORD_BYTES)
    }
}

/// EX/MEM latch (Execute to Memory).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMem {
    /// Latch holds an instruction.
    pub valid: bool,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Control signals.
    pub ctrl: ControlSignals,
    /// ALU result, effective address, or link address.
    pub result: u32,
    /// Forwarded `rt` value for stores.
    pub store_data: u32,
    /// Architectural destination register.
    pub write_reg: usize,
    /// Physical destination register.
    pub phys_dest: Option<PhysReg>,
    /// Reorder buffer entry of the instruction.
    pub rob_tag: Option<RobTag>,
}

impl ExMem {
    /// Whether this instruction is a load that writes a nonzero register.
    pub const fn is_load(&self) -> bool {
        self.valid && self.ctrl.mem_read && self.ctrl.reg_write && self.write_reg != 0
    }

    /// EX/MEM bypass keyed by architectural register.
    ///
    /// Loads do not forward from here; their value is not known until Memory.
    pub const fn bypass_arch(&self) -> Option<Bypass<usize>> {
        if self.valid && self.ctrl.reg_write && !self.ctrl.mem_read && self.write_reg != 0 {
            Some(Bypass {
                key: self.write_reg,
                value: self.result,
            })
        } else {
            None
        }
    }

    /// EX/MEM bypass keyed by physical register.
    pub fn bypass_phys(&self) -> Option<Bypass<PhysReg>> {
        if !self.valid || !self.ctrl.reg_write || self.ctrl.mem_read {
            return None;
        }
        self.phys_dest.map(|key| Bypass {
            key,
            value: self.result,
        })
    }
}

/// MEM/WB latch (Memory to Writeback).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWb {
    /// Latch holds an instruction.
    pub valid: bool,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// Control signals.
    pub ctrl: ControlSignals,
    /// ALU result or link address.
    pub result: u32,
    /// Value returned by a load.
    pub mem_data: u32,
    /// Architectural destination register.
    pub write_reg: usize,
    /// Physical destination register.
    pub phys_dest: Option<PhysReg>,
    /// Reorder buffer entry of the instruction.
    pub rob_tag: Option<RobTag>,
}

impl MemWb {
    /// Value the instruction writes back.
    pub const fn value(&self) -> u32 {
        if self.ctrl.mem_to_reg {
            self.mem_data
        } else {
            self.result
        }
    }

    /// Whether the instruction writes a nonzero architectural register.
    pub const fn writes_reg(&self) -> bool {
        self.valid && self.ctrl.reg_write && self.write_reg != 0
    }

    /// MEM/WB bypass keyed by architectural register.
    pub const fn bypass_arch(&self) -> Option<Bypass<usize>> {
        if self.writes_reg() {
            Some(Bypass {
                key: self.write_reg,
                value: self.value(),
            })
        } else {
            None
        }
    }

    /// MEM/WB bypass keyed by physical register.
    pub fn bypass_phys(&self) -> Option<Bypass<PhysReg>> {
        if !self.valid || !self.ctrl.reg_write {
            return None;
        }
        self.phys_dest.map(|key| Bypass {
            key,
            value: self.value(),
        })
    }
}

macro_rules! impl_latch {
    ($($latch:ty),*) => {
        $(
            impl PipelineLatch for $latch {
                fn flush(&mut self) {
                    *self = Self::default();
                }

                fn is_empty(&self) -> bool {
                    !self.valid
                }
            }
        )*
    };
}

impl_latch!(IfId, IdEx, ExMem, MemWb);

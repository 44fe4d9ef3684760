//! Pipeline control signals and operation types.
//!
//! This module defines the signals that steer an instruction through the datapath. It provides:
//! 1. **ALU Selection:** The decoder's coarse [`AluClass`] and the concrete [`AluOp`].
//! 2. **Operand Selection:** Immediate vs register source, shift amount, zero extension.
//! 3. **Memory Control:** Load/store enables and the [`MemWidth`] of the access.
//! 4. **Control Flow:** Branch, branch-not-equal, jump, jump-register and link.

/// Operation class produced by the decoder; refined by ALU control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluClass {
    /// Address and add-immediate arithmetic.
    #[default]
    Add,
    /// Branch comparison.
    Sub,
    /// R-type: operation chosen by the function code.
    Funct,
    /// Immediate logic and compare: operation chosen by the opcode.
    Immediate,
}

/// Concrete ALU operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    #[default]
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOR.
    Nor,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Shift left logical; operand A is the shift amount.
    Sll,
    /// Shift right logical; operand A is the shift amount.
    Srl,
    /// Shift right arithmetic; operand A is the shift amount.
    Sra,
    /// Load upper immediate: operand B shifted into the upper half.
    Lui,
}

/// Width of a memory access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// Full 32-bit word.
    #[default]
    Word,
    /// Low 16 bits.
    Half,
    /// Low 8 bits.
    Byte,
}

/// Control signals generated by the decoder.
///
/// The all-`false` default is a no-op: it writes nothing, touches no memory,
/// and never redirects the PC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// ALU operand B is the extended immediate instead of `rt`.
    pub alu_src: bool,
    /// Destination is `rd` (R-type) rather than `rt`.
    pub reg_dest: bool,
    /// ALU operation class.
    pub alu_op: AluClass,
    /// Operand A is the shift amount instead of `rs`.
    pub shift: bool,
    /// Memory read (load).
    pub mem_read: bool,
    /// Memory write (store).
    pub mem_write: bool,
    /// Write the destination register.
    pub reg_write: bool,
    /// Write-back value comes from memory.
    pub mem_to_reg: bool,
    /// Halfword access.
    pub halfword: bool,
    /// Byte access.
    pub byte: bool,
    /// Conditional branch.
    pub branch: bool,
    /// The branch is taken on inequality.
    pub bne: bool,
    /// Absolute jump (`j`, `jal`).
    pub jump: bool,
    /// Jump to the address in `rs` (`jr`).
    pub jump_reg: bool,
    /// Write `pc + 8` to `r31`.
    pub link: bool,
    /// Zero-extend rather than sign-extend the immediate.
    pub zero_extend: bool,
}

impl ControlSignals {
    /// Returns true for any instruction that may redirect the PC.
    pub const fn is_control_flow(&self) -> bool {
        self.branch || self.bne || self.jump || self.jump_reg
    }

    /// Returns true for loads and stores.
    pub const fn is_mem(&self) -> bool {
        self.mem_read || self.mem_write
    }

    /// Memory access width.
    pub const fn width(&self) -> MemWidth {
        if self.byte {
            MemWidth::Byte
        } else if self.halfword {
            MemWidth::Half
        } else {
            MemWidth::Word
        }
    }

    /// Whether the `rs` field names a live source operand.
    pub const fn reads_rs(&self) -> bool {
        !self.shift && !self.jump
    }

    /// Whether the `rt` field names a live source operand.
    pub const fn reads_rt(&self) -> bool {
        (!self.alu_src || self.mem_write || self.branch || self.bne)
            && !self.jump
            && !self.jump_reg
    }

    /// Branch outcome given the ALU zero flag.
    pub const fn branch_taken(&self, zero: bool) -> bool {
        (self.branch && !self.bne && zero) || (self.bne && !zero)
    }
}

//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage of every
//! model. ALU control first refines the decoder's [`AluClass`] into a concrete
//! [`AluOp`]; execution then produces the 32-bit result and the zero flag used
//! for branch resolution.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Lui
//! - [`logic`]:      And, Or, Xor, Nor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract, load upper).
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::core::pipeline::signals::{AluClass, AluOp};
use crate::isa::mips32::{funct, opcodes};

/// Arithmetic Logic Unit for integer operations. Stateless.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Generates the ALU operation from the decoder class, function code and opcode.
    ///
    /// Unknown function codes and opcodes fall back to `Add`; the decoder has
    /// already turned such instructions into no-ops.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::core::pipeline::signals::{AluClass, AluOp};
    ///
    /// assert_eq!(Alu::control(AluClass::Funct, 0x27, 0), AluOp::Nor);
    /// assert_eq!(Alu::control(AluClass::Immediate, 0, 0x0F), AluOp::Lui);
    /// assert_eq!(Alu::control(AluClass::Sub, 0, 0x04), AluOp::Sub);
    /// ```
    pub const fn control(class: AluClass, funct: u32, opcode: u32) -> AluOp {
        match class {
            AluClass::Add => AluOp::Add,
            AluClass::Sub => AluOp::Sub,
            AluClass::Funct => match funct {
                funct::SUB | funct::SUBU => AluOp::Sub,
                funct::AND => AluOp::And,
                funct::OR => AluOp::Or,
                funct::XOR => AluOp::Xor,
                funct::NOR => AluOp::Nor,
                funct::SLT => AluOp::Slt,
                funct::SLTU => AluOp::Sltu,
                funct::SLL => AluOp::Sll,
                funct::SRL => AluOp::Srl,
                funct::SRA => AluOp::Sra,
                _ => AluOp::Add,
            },
            AluClass::Immediate => match opcode {
                opcodes::OP_SLTI => AluOp::Slt,
                opcodes::OP_SLTIU => AluOp::Sltu,
                opcodes::OP_ANDI => AluOp::And,
                opcodes::OP_ORI => AluOp::Or,
                opcodes::OP_XORI => AluOp::Xor,
                opcodes::OP_LUI => AluOp::Lui,
                _ => AluOp::Add,
            },
        }
    }

    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (`rs`, or the shift amount for shifts)
    /// * `b`  - Second operand (`rt` or the extended immediate)
    ///
    /// # Returns
    ///
    /// `(result, zero)` where `zero` is set when the result is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), (50, false));
    /// assert_eq!(Alu::execute(AluOp::Sub, 7, 7), (0, true));
    /// assert_eq!(Alu::execute(AluOp::Sll, 4, 0x1), (0x10, false));
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), (1, false));
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> (u32, bool) {
        let result = match op {
            AluOp::Add | AluOp::Sub | AluOp::Lui => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Nor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        };
        (result, result == 0)
    }
}

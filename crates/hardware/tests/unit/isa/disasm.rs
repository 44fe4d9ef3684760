//! Disassembler Tests.

use mipsim_core::isa::disasm::disassemble;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::inst;

#[rstest]
#[case(inst().add(10, 8, 9).build(), "add t2, t0, t1")]
#[case(inst().addi(29, 29, -16).build(), "addi sp, sp, -16")]
#[case(inst().ori(1, 0, 0xBEEF).build(), "ori at, zero, 0xbeef")]
#[case(inst().lui(8, 0x1000).build(), "lui t0, 0x1000")]
#[case(inst().lw(31, 12, 29).build(), "lw ra, 12(sp)")]
#[case(inst().sb(4, -1, 5).build(), "sb a0, -1(a1)")]
#[case(inst().sll(2, 3, 7).build(), "sll v0, v1, 7")]
#[case(inst().beq(8, 0, -3).build(), "beq t0, zero, -3")]
#[case(inst().jal(0x40).build(), "jal 0x40")]
#[case(inst().jr(31).build(), "jr ra")]
#[case(0, "nop")]
fn mnemonics(#[case] word: u32, #[case] text: &str) {
    assert_eq!(disassemble(word), text);
}

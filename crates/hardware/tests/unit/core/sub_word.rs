//! Sub-word Access Tests.
//!
//! Byte and halfword stores must merge into the containing word without
//! disturbing the other lanes; sub-word loads are zero-extended. Lanes are
//! big-endian within the word unless the loaded image says otherwise.

use mipsim_core::common::SimError;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::inst;
use crate::common::harness::{DATA_BASE, TestContext};

const BASE: i32 = DATA_BASE as i32;

#[rstest]
#[case::single_cycle(0)]
#[case::in_order(1)]
#[case::out_of_order(2)]
fn sub_word_stores_preserve_other_lanes(#[case] level: u8) {
    let prog = [
        inst().addi(1, 0, 0xAB).build(),
        inst().sb(1, BASE + 1, 0).build(),
        inst().ori(3, 0, 0xBEEF).build(),
        inst().sh(3, BASE + 2, 0).build(),
        inst().lw(2, BASE, 0).build(),
        inst().lbu(4, BASE + 3, 0).build(),
        inst().lhu(5, BASE, 0).build(),
        inst().lbu(6, BASE + 1, 0).build(),
    ];
    let mut ctx = TestContext::new(level)
        .load_program(0, &prog)
        .with_word(DATA_BASE, 0x1122_3344);
    let _ = ctx.run_to_halt();

    assert_eq!(ctx.read_word(DATA_BASE), 0x11AB_BEEF);
    assert_eq!(ctx.get_reg(2), 0x11AB_BEEF);
    assert_eq!(ctx.get_reg(4), 0xEF);
    assert_eq!(ctx.get_reg(5), 0x11AB);
    assert_eq!(ctx.get_reg(6), 0xAB);
}

#[rstest]
#[case::single_cycle(0)]
#[case::in_order(1)]
#[case::out_of_order(2)]
fn byte_store_only_writes_low_eight_bits(#[case] level: u8) {
    let prog = [
        inst().addi(1, 0, -1).build(),
        inst().sb(1, BASE, 0).build(),
        inst().sh(1, BASE + 6, 0).build(),
    ];
    let mut ctx = TestContext::new(level).load_program(0, &prog);
    let _ = ctx.run_to_halt();

    assert_eq!(ctx.read_word(DATA_BASE), 0xFF00_0000);
    assert_eq!(ctx.read_word(DATA_BASE + 4), 0x0000_FFFF);
}

#[rstest]
#[case::single_cycle(0)]
#[case::in_order(1)]
#[case::out_of_order(2)]
fn misaligned_halfword_faults(#[case] level: u8) {
    let prog = [
        inst().addi(2, 0, 5).build(),
        inst().lhu(1, BASE + 1, 0).build(),
    ];
    let mut ctx = TestContext::new(level).load_program(0, &prog);
    let err = ctx.sim.run(100).unwrap_err();

    assert!(matches!(err, SimError::MisalignedAccess { addr } if addr == DATA_BASE + 1));
    assert_eq!(ctx.get_reg(1), 0);
}

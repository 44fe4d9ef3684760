//! Load-Use Hazard Detection Tests.
//!
//! Verifies that `need_stall_load_use` fires only when the instruction about
//! to execute reads the register being loaded, and that the in-order pipeline
//! loses exactly one cycle when it does.

use mipsim_core::core::pipeline::backend::shared::decode::decode_fields;
use mipsim_core::core::pipeline::hazards::need_stall_load_use;
use mipsim_core::core::pipeline::latches::{ExMem, IdEx};
use mipsim_core::isa::decode::decode;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::inst;
use crate::common::harness::{DATA_BASE, TestContext};

/// Helper: EX/MEM holding `lw rt, 0(r0)`.
fn load_in_ex_mem(rt: u32) -> ExMem {
    let word = inst().lw(rt, 0, 0).build();
    ExMem {
        valid: true,
        inst: word,
        ctrl: decode(word),
        write_reg: rt as usize,
        ..ExMem::default()
    }
}

/// Helper: ID/EX holding a decoded instruction.
fn in_id_ex(word: u32) -> IdEx {
    decode_fields(0x40, word)
}

// ══════════════════════════════════════════════════════════
// 1. Detection
// ══════════════════════════════════════════════════════════

#[test]
fn stall_when_load_dest_matches_rs() {
    let consumer = in_id_ex(inst().add(3, 5, 4).build());
    assert!(need_stall_load_use(&load_in_ex_mem(5), &consumer));
}

#[test]
fn stall_when_load_dest_matches_rt() {
    let consumer = in_id_ex(inst().add(3, 4, 5).build());
    assert!(need_stall_load_use(&load_in_ex_mem(5), &consumer));
}

#[test]
fn stall_when_store_data_is_loaded() {
    let consumer = in_id_ex(inst().sw(5, 4, 0).build());
    assert!(need_stall_load_use(&load_in_ex_mem(5), &consumer));
}

#[test]
fn no_stall_when_rt_is_a_destination() {
    // addi writes rt; it does not read it
    let consumer = in_id_ex(inst().addi(5, 4, 1).build());
    assert!(!need_stall_load_use(&load_in_ex_mem(5), &consumer));
}

#[test]
fn no_stall_for_shift_rs_field() {
    let consumer = in_id_ex(inst().sll(3, 4, 2).rs(5).build());
    assert!(!need_stall_load_use(&load_in_ex_mem(5), &consumer));
}

#[test]
fn no_stall_for_load_into_zero() {
    let consumer = in_id_ex(inst().add(3, 0, 0).build());
    assert!(!need_stall_load_use(&load_in_ex_mem(0), &consumer));
}

#[test]
fn no_stall_when_id_ex_is_bubble() {
    assert!(!need_stall_load_use(&load_in_ex_mem(5), &IdEx::default()));
}

#[test]
fn no_stall_when_producer_is_alu() {
    let producer = ExMem {
        valid: true,
        ctrl: decode(inst().addi(5, 0, 1).build()),
        write_reg: 5,
        ..ExMem::default()
    };
    let consumer = in_id_ex(inst().add(3, 5, 5).build());
    assert!(!need_stall_load_use(&producer, &consumer));
}

// ══════════════════════════════════════════════════════════
// 2. Pipeline timing
// ══════════════════════════════════════════════════════════

#[test]
fn load_use_stalls_exactly_one_cycle() {
    let prog = [
        inst().lw(1, DATA_BASE as i32, 0).build(),
        inst().add(2, 1, 1).build(),
    ];
    let mut ctx = TestContext::new(1)
        .load_program(0, &prog)
        .with_word(DATA_BASE, 21);
    let cycles = ctx.run_to_halt();

    assert_eq!(ctx.get_reg(2), 42);
    assert_eq!(ctx.stats().stalls_load_use, 1);
    assert_eq!(ctx.stats().forwards_mem_wb, 2);
    assert_eq!(cycles, 7);
}

#[test]
fn independent_instruction_after_load_does_not_stall() {
    let prog = [
        inst().lw(1, DATA_BASE as i32, 0).build(),
        inst().addi(2, 0, 3).build(),
        inst().add(3, 1, 2).build(),
    ];
    let mut ctx = TestContext::new(1)
        .load_program(0, &prog)
        .with_word(DATA_BASE, 4);
    let cycles = ctx.run_to_halt();

    assert_eq!(ctx.get_reg(3), 7);
    assert_eq!(ctx.stats().stalls_load_use, 0);
    assert_eq!(cycles, 7);
}

#[test]
fn stall_holds_fetch_and_decode() {
    let prog = [
        inst().lw(1, DATA_BASE as i32, 0).build(),
        inst().add(2, 1, 1).build(),
        inst().addi(3, 0, 1).build(),
    ];
    let mut ctx = TestContext::new(1).load_program(0, &prog);
    for _ in 0..3 {
        ctx.step();
    }
    let before = (ctx.pipeline().id_ex, ctx.pipeline().if_id, ctx.pipeline().fetch_pc);

    // Cycle 4: the load is in MEM and the add waits in ID/EX.
    ctx.step();
    let p = ctx.pipeline();
    assert_eq!(ctx.stats().stalls_load_use, 1);
    assert!(!p.ex_mem.valid);
    assert!(p.mem_wb.valid);
    assert_eq!((p.id_ex, p.if_id, p.fetch_pc), before);
}

#[test]
fn load_feeding_store_data_stalls() {
    let prog = [
        inst().lw(1, DATA_BASE as i32, 0).build(),
        inst().sw(1, DATA_BASE as i32 + 4, 0).build(),
    ];
    let mut ctx = TestContext::new(1)
        .load_program(0, &prog)
        .with_word(DATA_BASE, 0xDEAD_BEEF);
    let _ = ctx.run_to_halt();

    assert_eq!(ctx.read_word(DATA_BASE + 4), 0xDEAD_BEEF);
    assert_eq!(ctx.stats().stalls_load_use, 1);
}

#[rstest]
#[case::single_cycle(0)]
#[case::in_order(1)]
#[case::out_of_order(2)]
fn stalled_consumer_keeps_value_retired_during_stall(#[case] level: u8) {
    // r31 is written back in the stall cycle, after the consumer read it at decode.
    let prog = [
        inst().add(31, 1, 0).build(),
        inst().lw(2, DATA_BASE as i32, 0).build(),
        inst().add(1, 2, 31).build(),
    ];
    let mut ctx = TestContext::new(level)
        .load_program(0, &prog)
        .with_reg(1, 1)
        .with_word(DATA_BASE, 0x0101_0101);
    let _ = ctx.run_to_halt();

    assert_eq!(ctx.get_reg(31), 1);
    assert_eq!(ctx.get_reg(1), 0x0101_0102);
}

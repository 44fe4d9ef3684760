//! Free List Tests.
//!
//! Physical registers are conserved: at every cycle each one is either on the
//! free list or referenced by the RAT or an in-flight ROB entry. When the list
//! runs dry, rename stalls instead of failing.

use mipsim_core::config::Config;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::inst;
use crate::common::harness::{TestContext, config};

fn small_engine(phys_regs: usize) -> Config {
    let mut config = config(2);
    config.ooo.phys_regs = phys_regs;
    config
}

fn six_writes() -> Vec<u32> {
    (1..=6).map(|r| inst().addi(r, 0, r as i32 * 10).build()).collect()
}

#[test]
fn conservation_holds_every_cycle() {
    let prog = [
        inst().lw(1, 0x100, 0).build(),
        inst().add(2, 1, 1).build(),
        inst().sw(2, 0x104, 0).build(),
        inst().addi(1, 1, 1).build(),
        inst().bne(1, 0, 1).build(),
        inst().addi(3, 0, 3).build(),
        inst().sub(4, 2, 1).build(),
    ];
    let mut ctx = TestContext::new(2).load_program(0, &prog).with_word(0x100, 5);
    let _ = ctx.run_checked(|ctx| assert!(ctx.ooo().conservation_holds()));
    assert_eq!(ctx.get_reg(4), 4);
    assert_eq!(ctx.read_word(0x104), 10);
}

#[test]
fn drained_engine_returns_all_shadow_registers() {
    let mut ctx = TestContext::new(2).load_program(0, &six_writes());
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.ooo().free_list().len(), 32);
    assert!(ctx.ooo().rob().is_empty());
}

#[test]
fn exhaustion_stalls_rename() {
    let mut ctx = TestContext::with_config(&small_engine(34)).load_program(0, &six_writes());
    let _ = ctx.run_checked(|ctx| {
        assert!(ctx.ooo().conservation_holds());
        let mut in_flight = 0;
        ctx.ooo().rob().for_each_valid(|e| in_flight += usize::from(e.dest.is_some()));
        assert!(in_flight <= 2);
    });

    assert!(ctx.stats().stalls_rename > 0);
    for r in 1..=6 {
        assert_eq!(ctx.get_reg(r), r as u32 * 10);
    }
    assert_eq!(ctx.ooo().free_list().len(), 2);
}

#[test]
fn exhaustion_keeps_latch_until_register_frees() {
    let mut ctx = TestContext::with_config(&small_engine(33)).load_program(0, &six_writes());
    let mut saw_stall_with_latch = false;
    let _ = ctx.run_checked(|ctx| {
        let engine = ctx.ooo();
        if engine.free_list().is_empty() && engine.decoded().is_some() {
            saw_stall_with_latch = true;
        }
    });
    assert!(saw_stall_with_latch);
    assert_eq!(ctx.get_reg(6), 60);
}

//! In-Order Commit Tests.
//!
//! A load chain delays one instruction while younger independent work
//! completes around it. Completion order follows readiness; commit order
//! follows the program.

use pretty_assertions::assert_eq;

use crate::common::builder::instruction::inst;
use crate::common::harness::TestContext;

/// 0 lw r1 / 4 lw r2, 0(r1) / 8 add r3 / 12 addi r4 / 16 addi r6
fn pointer_chase() -> TestContext {
    let prog = [
        inst().lw(1, 0x100, 0).build(),
        inst().lw(2, 0, 1).build(),
        inst().add(3, 2, 2).build(),
        inst().addi(4, 0, 7).build(),
        inst().addi(6, 0, 8).build(),
    ];
    TestContext::new(2)
        .load_program(0, &prog)
        .with_word(0x100, 0x200)
        .with_word(0x200, 21)
}

#[test]
fn independent_work_completes_before_dependent_add() {
    let mut ctx = pointer_chase();
    let cycles = ctx.run_to_halt();

    let log = &ctx.stats().commit_log;
    assert_eq!(log.completion_pcs(), vec![0, 4, 12, 8, 16]);
    assert_eq!(log.commit_pcs(), vec![0, 4, 8, 12, 16]);
    assert_eq!(ctx.get_reg(3), 42);
    assert_eq!(ctx.get_reg(4), 7);
    assert_eq!(ctx.get_reg(6), 8);
    assert_eq!(cycles, 13);
}

#[test]
fn at_most_one_commit_per_cycle() {
    let mut ctx = pointer_chase();
    let mut last = 0;
    let _ = ctx.run_checked(|ctx| {
        let retired = ctx.stats().instructions_retired;
        assert!(retired - last <= 1);
        last = retired;
    });
    assert_eq!(last, 5);
}

#[test]
fn architectural_state_only_changes_at_commit() {
    let mut ctx = pointer_chase();
    let _ = ctx.run_checked(|ctx| {
        // r4 completes before the add but must not be visible until the add retires.
        if ctx.get_reg(4) == 7 {
            assert_eq!(ctx.get_reg(3), 42);
        }
        let head = ctx.ooo().rob().peek_head().map(|e| e.pc);
        if head == Some(12) {
            assert_eq!(ctx.get_reg(4), 0);
        }
    });
}

#[test]
fn commit_sets_pc_to_retiring_instruction() {
    let mut ctx = pointer_chase();
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.sim.regs.pc, 16);
}

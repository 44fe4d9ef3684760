//! Control Hazard Tests.
//!
//! Verifies branch and jump resolution in Execute: the taken condition,
//! target computation, the flush of wrong-path work, and the link register.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::inst;
use crate::common::harness::TestContext;

/// beq over one instruction: 0 addi r1 / 4 beq / 8 addi r2 (skipped) / 12 addi r3.
fn taken_branch_program() -> [u32; 4] {
    [
        inst().addi(1, 0, 1).build(),
        inst().beq(0, 0, 1).build(),
        inst().addi(2, 0, 99).build(),
        inst().addi(3, 0, 7).build(),
    ]
}

// ══════════════════════════════════════════════════════════
// 1. Branches on every model
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::single_cycle(0, 0)]
#[case::in_order(1, 1)]
#[case::out_of_order(2, 1)]
fn taken_branch_skips_wrong_path(#[case] level: u8, #[case] flushes: u64) {
    let mut ctx = TestContext::new(level).load_program(0, &taken_branch_program());
    let _ = ctx.run_to_halt();

    assert_eq!(ctx.get_reg(2), 0);
    assert_eq!(ctx.get_reg(3), 7);
    assert_eq!(ctx.commit_pcs(), vec![0, 4, 12]);
    assert_eq!(ctx.stats().flushes, flushes);
}

#[rstest]
#[case::single_cycle(0)]
#[case::in_order(1)]
#[case::out_of_order(2)]
fn untaken_branch_falls_through(#[case] level: u8) {
    let prog = [
        inst().bne(0, 0, 1).build(),
        inst().addi(2, 0, 99).build(),
        inst().addi(3, 0, 7).build(),
    ];
    let mut ctx = TestContext::new(level).load_program(0, &prog);
    let _ = ctx.run_to_halt();

    assert_eq!(ctx.get_reg(2), 99);
    assert_eq!(ctx.get_reg(3), 7);
    assert_eq!(ctx.stats().flushes, 0);
}

#[rstest]
#[case::single_cycle(0)]
#[case::in_order(1)]
#[case::out_of_order(2)]
fn bne_uses_forwarded_operand(#[case] level: u8) {
    let prog = [
        inst().addi(1, 0, 1).build(),
        inst().bne(1, 0, 1).build(),
        inst().addi(2, 0, 99).build(),
        inst().addi(3, 0, 7).build(),
    ];
    let mut ctx = TestContext::new(level).load_program(0, &prog);
    let _ = ctx.run_to_halt();

    assert_eq!(ctx.get_reg(2), 0);
    assert_eq!(ctx.get_reg(3), 7);
}

#[rstest]
#[case::single_cycle(0, 0)]
#[case::in_order(1, 4)]
#[case::out_of_order(2, 4)]
fn backward_branch_loop(#[case] level: u8, #[case] flushes: u64) {
    let prog = [
        inst().addi(1, 0, 5).build(),
        inst().addi(2, 2, 3).build(),
        inst().addi(1, 1, -1).build(),
        inst().bne(1, 0, -3).build(),
        inst().addi(3, 0, 1).build(),
    ];
    let mut ctx = TestContext::new(level).load_program(0, &prog);
    let _ = ctx.run_to_halt();

    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.get_reg(2), 15);
    assert_eq!(ctx.get_reg(3), 1);
    assert_eq!(ctx.stats().instructions_retired, 17);
    assert_eq!(ctx.stats().flushes, flushes);
}

// ══════════════════════════════════════════════════════════
// 2. Jumps and links
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::single_cycle(0)]
#[case::in_order(1)]
#[case::out_of_order(2)]
fn jal_links_pc_plus_eight_and_jr_returns(#[case] level: u8) {
    let prog = [
        inst().jal(12).build(),
        inst().addi(2, 0, 99).build(),
        inst().j(20).build(),
        inst().addi(4, 0, 4).build(),
        inst().jr(31).build(),
    ];
    let mut ctx = TestContext::new(level).load_program(0, &prog);
    let _ = ctx.run_to_halt();

    assert_eq!(ctx.get_reg(31), 8);
    assert_eq!(ctx.get_reg(4), 4);
    assert_eq!(ctx.get_reg(2), 0);
    assert_eq!(ctx.commit_pcs(), vec![0, 12, 16, 8]);
}

#[rstest]
#[case::in_order(1)]
#[case::out_of_order(2)]
fn jr_target_is_forwarded(#[case] level: u8) {
    let prog = [
        inst().addi(5, 0, 16).build(),
        inst().jr(5).build(),
        inst().addi(2, 0, 99).build(),
        inst().addi(3, 0, 99).build(),
        inst().addi(4, 0, 1).build(),
    ];
    let mut ctx = TestContext::new(level).load_program(0, &prog);
    let _ = ctx.run_to_halt();

    assert_eq!(ctx.get_reg(2), 0);
    assert_eq!(ctx.get_reg(3), 0);
    assert_eq!(ctx.get_reg(4), 1);
    assert_eq!(ctx.stats().flushes, 1);
}

// ══════════════════════════════════════════════════════════
// 3. Flush contents
// ══════════════════════════════════════════════════════════

#[test]
fn in_order_redirect_clears_if_id_and_id_ex() {
    let mut ctx = TestContext::new(1).load_program(0, &taken_branch_program());
    // beq is fetched in cycle 2 and executes in cycle 4.
    for _ in 0..4 {
        ctx.step();
    }
    let p = ctx.pipeline();
    assert!(!p.if_id.valid);
    assert!(!p.id_ex.valid);
    assert_eq!(p.ex_mem.pc, 4);
    assert_eq!(p.fetch_pc, 12);
    assert_eq!(ctx.stats().flushes, 1);
}

#[test]
fn ooo_redirect_clears_queue_and_marks_rob_entry() {
    let mut ctx = TestContext::new(2).load_program(0, &taken_branch_program());
    // beq is decoded in cycle 3, renamed in 4 and issues in 5.
    for _ in 0..5 {
        ctx.step();
    }
    let engine = ctx.ooo();
    assert!(engine.fetch_queue().is_empty());
    assert!(engine.decoded().is_none());
    assert_eq!(engine.fetch_pc(), 12);

    let mut marked = Vec::new();
    engine.rob().for_each_valid(|e| marked.push((e.pc, e.mispredicted)));
    assert_eq!(marked, vec![(0, false), (4, true)]);
}

#[test]
fn ooo_does_not_rename_past_unresolved_branch() {
    let mut ctx = TestContext::new(2).load_program(0, &taken_branch_program());
    for _ in 0..4 {
        ctx.step();
        let mut pcs = Vec::new();
        ctx.ooo().rob().for_each_valid(|e| pcs.push(e.pc));
        assert!(pcs.iter().all(|&pc| pc <= 4), "renamed wrong path: {pcs:?}");
    }
}

//! Memory Failure Tests.
//!
//! A failed access aborts the cycle without changing architectural state, and
//! ticking again retries it exactly. Uses a `mockall` memory for fetch faults
//! and a fault-injecting RAM for data faults.

use mipsim_core::common::SimError;
use mipsim_core::core::ExecutionModel;
use mipsim_core::sim::{ProgramImage, Simulator};
use mipsim_core::soc::Memory;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::inst;
use crate::common::harness::{DATA_BASE, MAX_CYCLES, config};
use crate::common::mocks::memory::{FaultyRam, MockMem};

#[rstest]
#[case::single_cycle(0)]
#[case::in_order(1)]
#[case::out_of_order(2)]
fn fetch_fault_aborts_cycle(#[case] level: u8) {
    let mut mem = MockMem::new();
    mem.expect_read_word()
        .returning(|addr| Err(SimError::MemoryFault { addr }));
    mem.expect_write_word().never();

    let mut sim = Simulator::new(&config(level), mem).unwrap();
    sim.model.set_fetch_limit(Some(4));

    assert!(matches!(sim.tick(), Err(SimError::MemoryFault { addr: 0 })));
    assert_eq!(sim.stats.cycles, 0);
    assert_eq!(sim.stats.instructions_retired, 0);
    assert_eq!(sim.regs.pc, 0);
}

#[rstest]
#[case::single_cycle(0)]
#[case::in_order(1)]
#[case::out_of_order(2)]
fn alu_program_never_writes_memory(#[case] level: u8) {
    let prog = vec![
        inst().addi(1, 0, 6).build(),
        inst().addi(2, 0, 7).build(),
        inst().sub(3, 2, 1).build(),
    ];
    let mut mem = MockMem::new();
    mem.expect_read_word()
        .returning(move |addr| Ok(prog.get((addr / 4) as usize).copied().unwrap_or(0)));
    mem.expect_write_word().never();

    let mut sim = Simulator::new(&config(level), mem).unwrap();
    sim.model.set_fetch_limit(Some(12));
    let _ = sim.run(MAX_CYCLES).unwrap();

    assert!(sim.is_halted());
    assert_eq!(sim.regs.read(3), 1);
}

#[rstest]
#[case::single_cycle(0)]
#[case::in_order(1)]
#[case::out_of_order(2)]
fn data_fault_retries_exactly(#[case] level: u8) {
    let prog = [
        inst().addi(1, 0, 5).build(),
        inst().sw(1, DATA_BASE as i32, 0).build(),
        inst().lw(2, DATA_BASE as i32, 0).build(),
        inst().add(3, 2, 1).build(),
    ];
    let mut sim = Simulator::new(&config(level), FaultyRam::new(0x1000)).unwrap();
    sim.load_program(&ProgramImage::from_words(0, &prog)).unwrap();
    sim.mem.inject_fault(DATA_BASE);

    let mut failures = 0;
    while !sim.is_halted() {
        assert!(sim.stats.cycles < MAX_CYCLES);
        let regs_before = sim.regs.clone();
        let cycles_before = sim.stats.cycles;
        match sim.tick() {
            Ok(()) => {}
            Err(SimError::MemoryFault { addr }) => {
                assert_eq!(addr, DATA_BASE);
                assert_eq!(sim.stats.cycles, cycles_before);
                if level == 0 {
                    assert_eq!(sim.regs, regs_before);
                }
                failures += 1;
                if failures == 3 {
                    sim.mem.clear_fault(DATA_BASE);
                }
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(failures, 3);
    assert_eq!(sim.mem.ram.read_word(DATA_BASE).unwrap(), 5);
    assert_eq!(sim.regs.read(3), 10);
    assert_eq!(sim.stats.instructions_retired, 4);
    assert_eq!(sim.stats.commit_log.commit_pcs(), vec![0, 4, 8, 12]);
}

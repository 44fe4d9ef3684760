use std::collections::HashSet;

use mockall::mock;
use mipsim_core::common::error::{Result, SimError};
use mipsim_core::soc::{ByteOrder, Memory, Ram};

mock! {
    pub Mem {}
    impl Memory for Mem {
        fn read_word(&mut self, addr: u32) -> Result<u32>;
        fn write_word(&mut self, addr: u32, val: u32) -> Result<()>;
    }
}

/// RAM that faults on chosen addresses until the fault is cleared.
#[derive(Debug)]
pub struct FaultyRam {
    pub ram: Ram,
    faults: HashSet<u32>,
    pub faulted_accesses: usize,
}

impl FaultyRam {
    pub fn new(size: usize) -> Self {
        Self {
            ram: Ram::new(0, size),
            faults: HashSet::new(),
            faulted_accesses: 0,
        }
    }

    pub fn inject_fault(&mut self, addr: u32) {
        let _ = self.faults.insert(addr);
    }

    pub fn clear_fault(&mut self, addr: u32) {
        let _ = self.faults.remove(&addr);
    }

    fn check(&mut self, addr: u32) -> Result<()> {
        if self.faults.contains(&addr) {
            self.faulted_accesses += 1;
            return Err(SimError::MemoryFault { addr });
        }
        Ok(())
    }
}

impl Memory for FaultyRam {
    fn read_word(&mut self, addr: u32) -> Result<u32> {
        self.check(addr)?;
        self.ram.read_word(addr)
    }

    fn write_word(&mut self, addr: u32, val: u32) -> Result<()> {
        self.check(addr)?;
        self.ram.write_word(addr, val)
    }

    fn byte_order(&self) -> ByteOrder {
        self.ram.byte_order()
    }

    fn set_byte_order(&mut self, order: ByteOrder) {
        self.ram.set_byte_order(order);
    }
}

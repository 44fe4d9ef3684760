//! Simulator: owns the architectural state, memory and one execution model.
//!
//! The model is chosen once, from the configured optimization level, and is
//! advanced one cycle per [`Simulator::tick`]. Registers and memory live here
//! rather than in the model, so every model sees the same collaborators.

use tracing::{debug, info};

use crate::common::RegisterFile;
use crate::common::error::Result;
use crate::config::{Config, OptLevel};
use crate::core::{ExecutionModel, ModelDispatch};
use crate::isa::disasm::disassemble;
use crate::sim::loader::ProgramImage;
use crate::soc::{Memory, Ram};
use crate::stats::SimStats;

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator<M: Memory = Ram> {
    /// Architectural register file and PC.
    pub regs: RegisterFile,
    /// Data and instruction memory.
    pub mem: M,
    /// Selected execution model.
    pub model: ModelDispatch,
    /// Performance counters.
    pub stats: SimStats,
    trace_instructions: bool,
}

impl Simulator<Ram> {
    /// Creates a simulator over a [`Ram`] sized by `config.memory`.
    ///
    /// # Errors
    ///
    /// Configuration validation failures.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mem = Ram::new(config.memory.base, config.memory.size);
        Self::new(config, mem)
    }
}

impl<M: Memory> Simulator<M> {
    /// Creates a simulator over `mem`, with the PC at `config.general.start_pc`.
    ///
    /// # Errors
    ///
    /// Configuration validation failures.
    pub fn new(config: &Config, mem: M) -> Result<Self> {
        config.validate()?;
        let mut regs = RegisterFile::new();
        regs.pc = config.general.start_pc;
        let model = ModelDispatch::new(config);
        debug!("model: {:?}", model.opt_level());
        Ok(Self {
            regs,
            mem,
            model,
            stats: SimStats::new(config.general.commit_log),
            trace_instructions: config.general.trace_instructions,
        })
    }

    /// Writes the image into memory, adopts its byte order, sets the PC to its
    /// entry point and stops fetch at the end of its code.
    ///
    /// # Errors
    ///
    /// A segment that does not fit in memory.
    pub fn load_program(&mut self, image: &ProgramImage) -> Result<()> {
        for segment in &image.segments {
            self.mem.load_words(segment.addr, &segment.words)?;
        }
        self.mem.set_byte_order(image.byte_order);
        self.regs.pc = image.entry;
        self.model.set_fetch_limit(image.code_end());
        Ok(())
    }

    /// Advances one clock cycle.
    ///
    /// # Errors
    ///
    /// A failed memory access. The cycle is not counted and may be retried.
    pub fn tick(&mut self) -> Result<()> {
        let retired = self.stats.instructions_retired;
        let fetch_pc = self.regs.pc;
        self.model
            .tick(&mut self.regs, &mut self.mem, &mut self.stats)?;
        self.stats.cycles += 1;

        if self.trace_instructions && self.stats.instructions_retired > retired {
            // The single-cycle model has already moved the PC past the instruction.
            let pc = match self.model.opt_level() {
                OptLevel::SingleCycle => fetch_pc,
                OptLevel::Pipelined | OptLevel::OutOfOrder => self.regs.pc,
            };
            if let Ok(inst) = self.mem.read_word(pc) {
                info!("{pc:#010x}: {}", disassemble(inst));
            }
        }
        Ok(())
    }

    /// Ticks until the model halts or `max_cycles` have elapsed.
    /// Returns the number of cycles run.
    ///
    /// # Errors
    ///
    /// The first failed memory access.
    pub fn run(&mut self, max_cycles: u64) -> Result<u64> {
        let start = self.stats.cycles;
        while !self.is_halted() && self.stats.cycles - start < max_cycles {
            self.tick()?;
        }
        let ran = self.stats.cycles - start;
        debug!("stopped after {ran} cycles (halted: {})", self.is_halted());
        Ok(ran)
    }

    /// All loaded code has been fetched and every instruction has retired.
    pub fn is_halted(&self) -> bool {
        self.model.is_halted(&self.regs)
    }
}

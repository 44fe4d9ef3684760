//! Execution model trait and model dispatch.
//!
//! This module defines:
//! 1. **`ExecutionModel`**: the per-cycle interface every model implements.
//! 2. **`ModelDispatch`**: enum dispatch selecting one model from the optimization level.

use crate::common::RegisterFile;
use crate::common::error::Result;
use crate::config::{Config, OptLevel};
use crate::core::pipeline::backend::inorder::InOrderPipeline;
use crate::core::pipeline::backend::o3::OooEngine;
use crate::core::single_cycle::SingleCycle;
use crate::soc::traits::Memory;
use crate::stats::SimStats;

/// A processor model advanced one clock cycle at a time.
///
/// Models own all of their microarchitectural state. Architectural state
/// (registers and PC) and memory are passed in on every tick.
pub trait ExecutionModel {
    /// Runs one cycle.
    ///
    /// An `Err` reports a failed memory access. The faulting instruction has not
    /// advanced, so ticking again retries it.
    fn tick(
        &mut self,
        regs: &mut RegisterFile,
        mem: &mut dyn Memory,
        stats: &mut SimStats,
    ) -> Result<()>;

    /// Stops fetching at and beyond `limit` (the end of the loaded program).
    fn set_fetch_limit(&mut self, limit: Option<u32>);

    /// Whether fetch has passed the limit and every in-flight instruction has retired.
    fn is_halted(&self, regs: &RegisterFile) -> bool;
}

/// Type-erased model selected by the optimization level.
#[derive(Debug)]
pub enum ModelDispatch {
    /// Level 0.
    SingleCycle(SingleCycle),
    /// Level 1.
    InOrder(Box<InOrderPipeline>),
    /// Level 2.
    OutOfOrder(Box<OooEngine>),
}

impl ModelDispatch {
    /// Builds the model named by `config.general.opt_level`.
    pub fn new(config: &Config) -> Self {
        match config.general.opt_level {
            OptLevel::SingleCycle => Self::SingleCycle(SingleCycle::new()),
            OptLevel::Pipelined => Self::InOrder(Box::default()),
            OptLevel::OutOfOrder => Self::OutOfOrder(Box::new(OooEngine::new(&config.ooo))),
        }
    }

    /// Optimization level of the selected model.
    pub const fn opt_level(&self) -> OptLevel {
        match self {
            Self::SingleCycle(_) => OptLevel::SingleCycle,
            Self::InOrder(_) => OptLevel::Pipelined,
            Self::OutOfOrder(_) => OptLevel::OutOfOrder,
        }
    }

    /// The out-of-order engine, when selected.
    pub fn as_ooo(&self) -> Option<&OooEngine> {
        match self {
            Self::OutOfOrder(engine) => Some(engine),
            _ => None,
        }
    }

    /// The in-order pipeline, when selected.
    pub fn as_inorder(&self) -> Option<&InOrderPipeline> {
        match self {
            Self::InOrder(pipeline) => Some(pipeline),
            _ => None,
        }
    }

    fn model_mut(&mut self) -> &mut dyn ExecutionModel {
        match self {
            Self::SingleCycle(m) => m,
            Self::InOrder(m) => m.as_mut(),
            Self::OutOfOrder(m) => m.as_mut(),
        }
    }

    fn model(&self) -> &dyn ExecutionModel {
        match self {
            Self::SingleCycle(m) => m,
            Self::InOrder(m) => m.as_ref(),
            Self::OutOfOrder(m) => m.as_ref(),
        }
    }
}

impl ExecutionModel for ModelDispatch {
    fn tick(
        &mut self,
        regs: &mut RegisterFile,
        mem: &mut dyn Memory,
        stats: &mut SimStats,
    ) -> Result<()> {
        self.model_mut().tick(regs, mem, stats)
    }

    fn set_fetch_limit(&mut self, limit: Option<u32>) {
        self.model_mut().set_fetch_limit(limit);
    }

    fn is_halted(&self, regs: &RegisterFile) -> bool {
        self.model().is_halted(regs)
    }
}

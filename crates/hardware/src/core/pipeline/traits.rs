//! Pipeline Latch Interface.
//!
//! Common behaviour of the inter-stage buffers: every latch can be cleared to a
//! bubble and asked whether it currently holds an instruction.

/// Represents a pipeline latch (inter-stage buffer).
pub trait PipelineLatch {
    /// Clears the latch to a bubble.
    ///
    /// Called when a taken branch or jump discards wrong-path instructions,
    /// and to insert the bubble of a load-use stall.
    fn flush(&mut self);

    /// Checks if the latch is empty.
    ///
    /// # Returns
    ///
    /// `true` if the latch holds no valid instruction.
    fn is_empty(&self) -> bool;
}

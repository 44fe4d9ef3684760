//! Pipelined execution models.
//!
//! Both models share the same stage decomposition (Fetch, Decode, Execute,
//! Memory, Writeback). The stage bodies that are identical live in [`shared`];
//! [`inorder`] wires them into a five-stage pipeline, [`o3`] adds register
//! renaming, reservation stations and in-order commit around them.

pub mod inorder;
pub mod o3;
pub mod shared;

/// Completion may be out of order; retirement never is.
pub mod commit_order;

/// Free-list conservation and exhaustion.
pub mod free_list;

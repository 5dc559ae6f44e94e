//! Allocation solver.
//!
//! - [`Allocator`] — Two-phase solve, extraction, and validation
//! - [`extract_rosters`] — Rosters from a solved network
//! - [`allocate`] — Convenience entry point with the default seat policy

mod allocator;
mod extract;

pub use allocator::{allocate, Allocator, AllocatorConfig};
pub use extract::extract_rosters;

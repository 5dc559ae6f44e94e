//! Problem-to-network compilation.
//!
//! - [`NodeLayout`] — Node numbering for people, slots, groups, source, sink
//! - [`compile`] — Builds the layered network after checking preferences and drivers
//! - [`CompiledNetwork`] — Solvable network with the phase-2 relaxation hook

mod builder;
mod layout;

pub use builder::{check_drivers, check_preferences, compile, CompiledNetwork};
pub use layout::NodeLayout;

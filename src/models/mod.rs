//! Domain model types for carpool allocation.
//!
//! Provides the core abstractions: people with group preferences and
//! license flags, the seat policy every vehicle obeys, the problem instance
//! tying them together, and the rosters that make up an allocation.

mod allocation;
mod person;
mod policy;
mod problem;
mod roster;

pub use allocation::{Allocation, Violation, ViolationType};
pub use person::Person;
pub use policy::SeatPolicy;
pub use problem::AllocationProblem;
pub use roster::Roster;

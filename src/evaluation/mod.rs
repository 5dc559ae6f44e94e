//! Allocation feasibility checking.

mod validator;

pub use validator::AllocationValidator;

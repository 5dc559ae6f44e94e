//! # u-carpool
//!
//! Carpool allocation library: seats people in the fewest vehicles such
//! that every vehicle is within its occupancy bounds, carries enough
//! licensed drivers, and only holds people who selected it.
//!
//! The assignment is modeled as a layered flow network and solved with
//! Edmonds–Karp in two phases; the extracted allocation is always
//! validated before it is returned.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Person, SeatPolicy, AllocationProblem, Roster, Allocation)
//! - [`flow`] — Residual flow network, BFS augmenting paths, Edmonds–Karp
//! - [`compiler`] — Problem-to-network compilation
//! - [`evaluation`] — Allocation validation
//! - [`solver`] — Two-phase allocator
//! - [`error`] — Error types
//! - `ffi` — JSON and C entry points (feature `ffi`)
//!
//! ## Example
//!
//! ```
//! use u_carpool::models::AllocationProblem;
//! use u_carpool::solver::Allocator;
//!
//! // 7 people, 4 of them licensed, everyone happy with either vehicle
//! let problem = AllocationProblem::new(vec![vec![0, 1]; 7], &[0, 1, 2, 3]).unwrap();
//! let allocation = Allocator::default().allocate(&problem).unwrap();
//!
//! for roster in allocation.rosters() {
//!     assert!((2..=5).contains(&roster.len()));
//!     assert!(roster.members().iter().filter(|&&p| p < 4).count() >= 2);
//! }
//! ```

pub mod compiler;
pub mod error;
pub mod evaluation;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod flow;
pub mod models;
pub mod solver;

pub use error::{AllocationError, ProblemError};
pub use solver::allocate;

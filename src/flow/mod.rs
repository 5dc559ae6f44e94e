//! Flow network primitives.
//!
//! - [`FlowNetwork`] — Residual graph with an edge arena and pair lookup
//! - [`find_augmenting_path`] / [`Trace`] — Breadth-first augmenting path search
//! - [`max_flow`] — Edmonds–Karp maximum flow, O(V E²)
//! - [`satisfy_lower_bounds`] — Feasible flow under edge lower bounds

mod bounded;
mod edmonds_karp;
mod network;
mod path;

pub use bounded::satisfy_lower_bounds;
pub use edmonds_karp::max_flow;
pub use network::{Capacity, Edge, EdgeId, FlowNetwork, NodeId};
pub use path::{find_augmenting_path, AugmentingPath, Trace};

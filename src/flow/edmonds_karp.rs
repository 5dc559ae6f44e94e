//! Edmonds–Karp maximum flow.
//!
//! # Algorithm
//!
//! Ford–Fulkerson with breadth-first path selection: repeatedly find a
//! fewest-hops augmenting path, push its bottleneck along every arc (the
//! paired reverse arcs gain the same amount, so later paths may cancel or
//! reroute it), and stop when the sink is unreachable.
//!
//! # Complexity
//!
//! O(V E²): at most O(V E) augmentations, each an O(E) search.
//!
//! # Reference
//!
//! Edmonds, J. & Karp, R.M. (1972). "Theoretical improvements in algorithmic
//! efficiency for network flow problems", *Journal of the ACM* 19(2), 248-264.

use log::{debug, trace};

use super::network::{Capacity, FlowNetwork, NodeId};
use super::path::find_augmenting_path;

/// Pushes the maximum flow from `source` to `sink`, returning the amount added.
///
/// Starts from whatever flow the network already carries, so calling it again
/// after inserting edges returns only the increment.
///
/// # Examples
///
/// ```
/// use u_carpool::flow::{max_flow, FlowNetwork};
///
/// let mut net = FlowNetwork::new(4);
/// net.add_edge(0, 1, 0, 2).unwrap();
/// net.add_edge(0, 2, 0, 2).unwrap();
/// net.add_edge(1, 3, 0, 1).unwrap();
/// net.add_edge(2, 3, 0, 3).unwrap();
///
/// assert_eq!(max_flow(&mut net, 0, 3), 3);
/// assert_eq!(max_flow(&mut net, 0, 3), 0);
/// ```
pub fn max_flow(network: &mut FlowNetwork, source: NodeId, sink: NodeId) -> Capacity {
    let mut total: Capacity = 0;
    let mut augmentations = 0usize;

    while let Some(path) = find_augmenting_path(network, source, sink) {
        let amount = path.bottleneck();
        for &arc in &path.arcs {
            network.push(arc, amount);
        }
        total += amount;
        augmentations += 1;
        trace!("augmented {} unit(s) along {:?}", amount, path.nodes());
    }

    debug!(
        "max flow {} -> {}: {} unit(s) in {} augmentation(s)",
        source, sink, total, augmentations
    );
    total
}

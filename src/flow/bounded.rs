//! Flows that honour edge lower bounds.
//!
//! # Algorithm
//!
//! Lower-bound elimination. Every edge `u → v` with bounds `[l, c]` becomes
//! an edge with capacity `c - l` in an auxiliary network, and its lower
//! bound turns into a demand: `v` is fed `l` units from a super source and
//! `u` drains `l` units into a super sink. An uncapacitated return path
//! from the sink back to the source lets the flow circulate.
//!
//! The bounds are satisfiable exactly when the auxiliary maximum flow
//! saturates every super-source edge. The flow on each original edge is
//! then its lower bound plus the auxiliary flow on its copy.
//!
//! # Complexity
//!
//! One Edmonds–Karp run on a network with three extra nodes and at most
//! `V + 2` extra edges.

use std::cmp::Ordering;

use log::debug;

use super::edmonds_karp::max_flow;
use super::network::{Capacity, Edge, FlowNetwork, NodeId};
use crate::error::NetworkError;

/// Replaces the network's flow with one that meets every lower bound.
///
/// On success every edge carries a flow within `[lower_bound, capacity]`
/// and flow is conserved at every node except `source` and `sink`. Returns
/// `Ok(false)`, leaving the network untouched, if no such flow exists.
///
/// # Examples
///
/// ```
/// use u_carpool::flow::{satisfy_lower_bounds, FlowNetwork};
///
/// // two routes to the sink; the lower one must carry a unit
/// let mut net = FlowNetwork::new(4);
/// net.add_edge(0, 1, 0, 1).unwrap();
/// net.add_edge(0, 2, 0, 1).unwrap();
/// net.add_edge(1, 3, 0, 1).unwrap();
/// net.add_edge(2, 3, 1, 1).unwrap();
///
/// assert!(satisfy_lower_bounds(&mut net, 0, 3).unwrap());
/// assert_eq!(net.flow(2, 3), 1);
/// assert!(net.lower_bound_deficits().is_empty());
/// ```
pub fn satisfy_lower_bounds(
    network: &mut FlowNetwork,
    source: NodeId,
    sink: NodeId,
) -> Result<bool, NetworkError> {
    let nodes = network.node_count();
    for node in [source, sink] {
        if node >= nodes {
            return Err(NetworkError::NodeOutOfRange { node, nodes });
        }
    }

    let relay = nodes;
    let super_source = nodes + 1;
    let super_sink = nodes + 2;
    let mut aux = FlowNetwork::new(nodes + 3);

    let edges: Vec<Edge> = network.edges().collect();
    let mut excess = vec![0i64; nodes];
    for edge in &edges {
        aux.add_edge(edge.from, edge.to, 0, edge.capacity - edge.lower_bound)?;
        excess[edge.to] += i64::from(edge.lower_bound);
        excess[edge.from] -= i64::from(edge.lower_bound);
    }

    // the relay keeps sink → source from colliding with an existing pair
    aux.add_edge(sink, relay, 0, Capacity::MAX)?;
    aux.add_edge(relay, source, 0, Capacity::MAX)?;

    let mut demand = 0u64;
    for (node, &amount) in excess.iter().enumerate() {
        let units = Capacity::try_from(amount.unsigned_abs()).unwrap_or(Capacity::MAX);
        match amount.cmp(&0) {
            Ordering::Greater => {
                aux.add_edge(super_source, node, 0, units)?;
                demand += u64::from(units);
            }
            Ordering::Less => {
                aux.add_edge(node, super_sink, 0, units)?;
            }
            Ordering::Equal => {}
        }
    }

    let routed = max_flow(&mut aux, super_source, super_sink);
    if u64::from(routed) < demand {
        debug!("lower bounds unsatisfiable: routed {routed} of {demand} demanded unit(s)");
        return Ok(false);
    }

    for (id, edge) in edges.iter().enumerate() {
        network.set_flow(id, edge.lower_bound + aux.flow(edge.from, edge.to));
    }
    debug!("lower bounds satisfied on {} edge(s)", edges.len());
    Ok(true)
}

//! Shortest augmenting path search.
//!
//! # Algorithm
//!
//! Breadth-first search from the source over residual arcs with positive
//! capacity. Each node is visited at most once and remembers the arc it was
//! reached through, so the first time the sink is dequeued the predecessor
//! chain is a fewest-hops augmenting path.
//!
//! # Complexity
//!
//! O(V + E) per search.

use std::collections::VecDeque;

use super::network::{ArcId, Capacity, FlowNetwork, NodeId};

/// Predecessor record of one breadth-first search over the residual network.
///
/// Built fresh for every search and dropped afterwards.
///
/// # Examples
///
/// ```
/// use u_carpool::flow::{FlowNetwork, Trace};
///
/// let mut net = FlowNetwork::new(4);
/// net.add_edge(0, 1, 0, 1).unwrap();
/// net.add_edge(1, 2, 0, 1).unwrap();
///
/// let trace = Trace::search(&net, 0, 2);
/// assert!(trace.reached(2));
/// assert_eq!(trace.predecessor(2), Some(1));
/// assert!(!trace.reached(3));
/// ```
#[derive(Debug, Clone)]
pub struct Trace {
    predecessor: Vec<Option<(NodeId, ArcId)>>,
    visited: Vec<bool>,
}

impl Trace {
    /// Runs a breadth-first search from `source`, stopping once `sink` is dequeued.
    ///
    /// An out-of-range `source` reaches nothing.
    pub fn search(network: &FlowNetwork, source: NodeId, sink: NodeId) -> Self {
        let nodes = network.node_count();
        let mut predecessor = vec![None; nodes];
        let mut visited = vec![false; nodes];
        if source >= nodes {
            return Self {
                predecessor,
                visited,
            };
        }
        let mut queue = VecDeque::with_capacity(nodes);

        visited[source] = true;
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            if u == sink {
                break;
            }
            for (arc, v, residual) in network.arcs_from(u) {
                if residual > 0 && !visited[v] {
                    visited[v] = true;
                    predecessor[v] = Some((u, arc));
                    queue.push_back(v);
                }
            }
        }

        Self {
            predecessor,
            visited,
        }
    }

    /// Returns `true` if the search reached `node`.
    pub fn reached(&self, node: NodeId) -> bool {
        self.visited.get(node).copied().unwrap_or(false)
    }

    /// Node from which `node` was first reached.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessor.get(node).copied().flatten().map(|(u, _)| u)
    }

    /// Walks predecessors back from `sink`, returning nodes and arcs in
    /// source-to-sink order.
    fn unwind(&self, sink: NodeId) -> (Vec<NodeId>, Vec<ArcId>) {
        let mut nodes = vec![sink];
        let mut arcs = Vec::new();
        let mut v = sink;
        while let Some((u, arc)) = self.predecessor[v] {
            arcs.push(arc);
            nodes.push(u);
            v = u;
        }
        nodes.reverse();
        arcs.reverse();
        (nodes, arcs)
    }
}

/// A source-to-sink path in the residual network with positive bottleneck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    nodes: Vec<NodeId>,
    pub(crate) arcs: Vec<ArcId>,
    bottleneck: Capacity,
}

impl AugmentingPath {
    /// Nodes along the path, source first.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of arcs on the path.
    pub fn hops(&self) -> usize {
        self.arcs.len()
    }

    /// Smallest residual capacity along the path.
    pub fn bottleneck(&self) -> Capacity {
        self.bottleneck
    }
}

/// Finds a fewest-hops augmenting path from `source` to `sink`.
///
/// Returns `None` if the sink is unreachable, `source == sink`, or either
/// node is out of range.
///
/// # Examples
///
/// ```
/// use u_carpool::flow::{find_augmenting_path, FlowNetwork};
///
/// let mut net = FlowNetwork::new(4);
/// net.add_edge(0, 1, 0, 3).unwrap();
/// net.add_edge(1, 3, 0, 2).unwrap();
/// net.add_edge(0, 2, 0, 1).unwrap();
/// net.add_edge(2, 1, 0, 1).unwrap();
///
/// let path = find_augmenting_path(&net, 0, 3).unwrap();
/// assert_eq!(path.nodes(), &[0, 1, 3]);
/// assert_eq!(path.bottleneck(), 2);
/// ```
pub fn find_augmenting_path(
    network: &FlowNetwork,
    source: NodeId,
    sink: NodeId,
) -> Option<AugmentingPath> {
    if source == sink {
        return None;
    }
    let trace = Trace::search(network, source, sink);
    if !trace.reached(sink) {
        return None;
    }
    let (nodes, arcs) = trace.unwind(sink);
    let bottleneck = arcs
        .iter()
        .map(|&arc| network.arc_residual(arc))
        .min()
        .unwrap_or(0);
    Some(AugmentingPath {
        nodes,
        arcs,
        bottleneck,
    })
}

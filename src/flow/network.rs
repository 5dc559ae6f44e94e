//! Residual flow network.

use std::collections::HashMap;

use crate::error::NetworkError;

/// Node index within a [`FlowNetwork`].
pub type NodeId = usize;

/// Logical edge index within a [`FlowNetwork`].
pub type EdgeId = usize;

/// Edge capacity and flow amounts.
pub type Capacity = u32;

/// Residual arc index. Edge `e` owns arcs `2e` (forward) and `2e + 1` (reverse).
pub(crate) type ArcId = usize;

/// Snapshot of one logical edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Tail node.
    pub from: NodeId,
    /// Head node.
    pub to: NodeId,
    /// Minimum flow for the edge to be considered satisfied.
    pub lower_bound: Capacity,
    /// Maximum flow.
    pub capacity: Capacity,
    /// Current flow, `0 ≤ flow ≤ capacity`.
    pub flow: Capacity,
}

impl Edge {
    /// Additional flow this edge can carry.
    pub fn residual(&self) -> Capacity {
        self.capacity - self.flow
    }

    /// Returns `true` if the flow has reached capacity.
    pub fn is_saturated(&self) -> bool {
        self.flow == self.capacity
    }

    /// Returns `true` if the flow meets the lower bound.
    pub fn meets_lower_bound(&self) -> bool {
        self.flow >= self.lower_bound
    }
}

#[derive(Debug, Clone)]
struct Arc {
    head: NodeId,
    residual: Capacity,
}

#[derive(Debug, Clone)]
struct Bounds {
    from: NodeId,
    to: NodeId,
    lower_bound: Capacity,
    capacity: Capacity,
}

/// A directed flow network stored as an arena of residual arcs.
///
/// Each logical edge owns a forward arc whose residual is `capacity - flow`
/// and a paired reverse arc whose residual is `flow` (the amount that can be
/// cancelled). Edges are addressed by their endpoint pair; at most one edge
/// exists per ordered pair.
///
/// # Examples
///
/// ```
/// use u_carpool::flow::FlowNetwork;
///
/// let mut net = FlowNetwork::new(3);
/// net.add_edge(0, 1, 0, 4).unwrap();
/// net.add_edge(1, 2, 1, 2).unwrap();
/// assert_eq!(net.residual_capacity(0, 1), 4);
/// assert_eq!(net.residual_capacity(1, 0), 0);
/// assert_eq!(net.residual_capacity(0, 2), 0);
/// assert_eq!(net.edge_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    adjacency: Vec<Vec<ArcId>>,
    arcs: Vec<Arc>,
    bounds: Vec<Bounds>,
    index: HashMap<(NodeId, NodeId), EdgeId>,
}

impl FlowNetwork {
    /// Creates a network with `nodes` nodes and no edges.
    pub fn new(nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); nodes],
            arcs: Vec::new(),
            bounds: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts an edge `from → to` together with its reverse residual arc.
    ///
    /// Inserting a pair that already exists overwrites its bounds and resets
    /// its flow to zero, returning the existing id.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        lower_bound: Capacity,
        capacity: Capacity,
    ) -> Result<EdgeId, NetworkError> {
        let nodes = self.node_count();
        for node in [from, to] {
            if node >= nodes {
                return Err(NetworkError::NodeOutOfRange { node, nodes });
            }
        }
        if from == to {
            return Err(NetworkError::SelfLoop { node: from });
        }
        if lower_bound > capacity {
            return Err(NetworkError::InvalidBounds {
                lower_bound,
                capacity,
            });
        }

        if let Some(&id) = self.index.get(&(from, to)) {
            let bounds = &mut self.bounds[id];
            bounds.lower_bound = lower_bound;
            bounds.capacity = capacity;
            self.arcs[2 * id].residual = capacity;
            self.arcs[2 * id + 1].residual = 0;
            return Ok(id);
        }

        let id = self.bounds.len();
        self.arcs.push(Arc {
            head: to,
            residual: capacity,
        });
        self.arcs.push(Arc {
            head: from,
            residual: 0,
        });
        self.adjacency[from].push(2 * id);
        self.adjacency[to].push(2 * id + 1);
        self.bounds.push(Bounds {
            from,
            to,
            lower_bound,
            capacity,
        });
        self.index.insert((from, to), id);
        Ok(id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of logical edges.
    pub fn edge_count(&self) -> usize {
        self.bounds.len()
    }

    /// Looks up the edge `from → to`.
    pub fn find_edge(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.index.get(&(from, to)).copied()
    }

    /// Returns a snapshot of the edge with the given id.
    pub fn edge(&self, id: EdgeId) -> Option<Edge> {
        let bounds = self.bounds.get(id)?;
        Some(Edge {
            from: bounds.from,
            to: bounds.to,
            lower_bound: bounds.lower_bound,
            capacity: bounds.capacity,
            flow: self.arcs[2 * id + 1].residual,
        })
    }

    /// Iterates over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.edge_count()).filter_map(move |id| self.edge(id))
    }

    /// Iterates over the edges leaving `node`, in insertion order.
    ///
    /// Yields nothing if `node` is out of range.
    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .get(node)
            .into_iter()
            .flatten()
            .filter(|&&arc| arc % 2 == 0)
            .filter_map(move |&arc| self.edge(arc / 2))
    }

    /// Current flow on the edge `from → to`, zero if there is none.
    pub fn flow(&self, from: NodeId, to: NodeId) -> Capacity {
        self.find_edge(from, to)
            .map_or(0, |id| self.arcs[2 * id + 1].residual)
    }

    /// Amount of additional flow that can move from `u` to `v`.
    ///
    /// Counts the unused capacity of an edge `u → v` plus the cancellable
    /// flow of an edge `v → u`. Zero if neither edge exists.
    pub fn residual_capacity(&self, u: NodeId, v: NodeId) -> Capacity {
        let forward = self.find_edge(u, v).map_or(0, |id| self.arcs[2 * id].residual);
        let backward = self
            .find_edge(v, u)
            .map_or(0, |id| self.arcs[2 * id + 1].residual);
        forward.saturating_add(backward)
    }

    /// Edges whose flow is below their lower bound.
    pub fn lower_bound_deficits(&self) -> Vec<Edge> {
        self.edges().filter(|e| !e.meets_lower_bound()).collect()
    }

    /// Sets every flow back to zero, keeping the topology.
    pub fn reset_flows(&mut self) {
        for (id, bounds) in self.bounds.iter().enumerate() {
            self.arcs[2 * id].residual = bounds.capacity;
            self.arcs[2 * id + 1].residual = 0;
        }
    }

    /// Overwrites the flow of edge `id`, keeping its paired arcs consistent.
    ///
    /// `flow` must not exceed the edge capacity.
    pub(crate) fn set_flow(&mut self, id: EdgeId, flow: Capacity) {
        let capacity = self.bounds[id].capacity;
        debug_assert!(flow <= capacity, "flow {flow} exceeds capacity {capacity}");
        self.arcs[2 * id].residual = capacity.saturating_sub(flow);
        self.arcs[2 * id + 1].residual = flow;
    }

    /// Residual arcs leaving `node` as `(arc, head, residual)`.
    pub(crate) fn arcs_from(
        &self,
        node: NodeId,
    ) -> impl Iterator<Item = (ArcId, NodeId, Capacity)> + '_ {
        self.adjacency[node].iter().map(move |&arc| {
            let a = &self.arcs[arc];
            (arc, a.head, a.residual)
        })
    }

    /// Residual capacity of a single arc.
    pub(crate) fn arc_residual(&self, arc: ArcId) -> Capacity {
        self.arcs[arc].residual
    }

    /// Pushes `amount` along `arc`, crediting its paired arc.
    ///
    /// # Panics
    ///
    /// Panics if `amount` exceeds the arc's residual capacity.
    pub(crate) fn push(&mut self, arc: ArcId, amount: Capacity) {
        let residual = &mut self.arcs[arc].residual;
        *residual = residual
            .checked_sub(amount)
            .expect("push must not exceed residual capacity");
        self.arcs[arc ^ 1].residual += amount;
    }
}

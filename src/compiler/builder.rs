//! Translation of an allocation problem into a layered flow network.
//!
//! # Network
//!
//! ```text
//! source ─[1,1]─▶ person ─[0,1]─▶ licensed slot(g) ─[d,d]─────▶ group(g) ─[m,M]─▶ sink
//!                        └[0,1]─▶ open slot(g) ───[0,M-d]────▶ group(g)
//! ```
//!
//! Licensed people connect to the licensed slot of each preferred group,
//! everyone else to the open slot. `d` is the required driver count and
//! `[m, M]` the occupancy bounds of the seat policy. Capacity shaping routes
//! the flow; when a full flow still leaves an edge below its lower bound,
//! [`CompiledNetwork::satisfy_lower_bounds`] rebalances it.
//!
//! The optional relaxation edge `licensed slot(g) ─[0,M-d]─▶ open slot(g)`
//! lets surplus drivers take ordinary seats.

use log::debug;

use super::layout::NodeLayout;
use crate::error::{AllocationError, NetworkError, PreferenceIssue};
use crate::flow::{max_flow, satisfy_lower_bounds, Capacity, FlowNetwork, NodeId};
use crate::models::{AllocationProblem, SeatPolicy};

/// A problem compiled into its flow network, ready to solve.
///
/// # Examples
///
/// ```
/// use u_carpool::compiler::compile;
/// use u_carpool::models::{AllocationProblem, SeatPolicy};
///
/// let problem = AllocationProblem::new(vec![vec![0], vec![0]], &[0, 1]).unwrap();
/// let mut compiled = compile(&problem, &SeatPolicy::default()).unwrap();
/// assert_eq!(compiled.layout().groups(), 1);
/// assert_eq!(compiled.solve(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CompiledNetwork {
    network: FlowNetwork,
    layout: NodeLayout,
    slot_owner: Vec<Option<usize>>,
    policy: SeatPolicy,
    relaxed: bool,
}

impl CompiledNetwork {
    /// The underlying flow network.
    pub fn network(&self) -> &FlowNetwork {
        &self.network
    }

    /// Node numbering.
    pub fn layout(&self) -> NodeLayout {
        self.layout
    }

    /// Seat policy the network was shaped for.
    pub fn policy(&self) -> &SeatPolicy {
        &self.policy
    }

    /// Group owning a slot node; `None` for any other node.
    pub fn slot_group(&self, node: NodeId) -> Option<usize> {
        self.slot_owner.get(node).copied().flatten()
    }

    /// Returns `true` once the relaxation edges have been added.
    pub fn is_relaxed(&self) -> bool {
        self.relaxed
    }

    /// Runs max flow from the super source to the super sink, returning the
    /// flow added by this call.
    pub fn solve(&mut self) -> Capacity {
        max_flow(&mut self.network, self.layout.source(), self.layout.sink())
    }

    /// Replaces the current flow with one meeting every lower bound.
    ///
    /// Returns `Ok(false)` and keeps the current flow if none exists.
    pub fn satisfy_lower_bounds(&mut self) -> Result<bool, NetworkError> {
        satisfy_lower_bounds(&mut self.network, self.layout.source(), self.layout.sink())
    }

    /// Adds a licensed-slot → open-slot edge to every group.
    ///
    /// Calling it twice is harmless: the edges are only inserted once.
    pub fn add_relaxation_edges(&mut self) -> Result<(), NetworkError> {
        if self.relaxed {
            return Ok(());
        }
        let open_seats = self.policy.open_seats();
        for g in 0..self.layout.groups() {
            self.network.add_edge(
                self.layout.licensed_slot(g),
                self.layout.open_slot(g),
                0,
                open_seats,
            )?;
        }
        self.relaxed = true;
        debug!("added {} relaxation edge(s)", self.layout.groups());
        Ok(())
    }
}

/// Checks that every preference list is non-empty, no longer than the group
/// count, and names only existing groups.
pub fn check_preferences(problem: &AllocationProblem, groups: usize) -> Result<(), AllocationError> {
    for person in problem.people() {
        let prefs = person.preferences();
        let reason = if prefs.is_empty() {
            Some(PreferenceIssue::Empty)
        } else if prefs.len() > groups {
            Some(PreferenceIssue::TooMany {
                len: prefs.len(),
                groups,
            })
        } else {
            prefs
                .iter()
                .find(|&&g| g >= groups)
                .map(|&group| PreferenceIssue::OutOfRange { group, groups })
        };
        if let Some(reason) = reason {
            return Err(AllocationError::InvalidPreferences {
                person: person.id(),
                reason,
            });
        }
    }
    Ok(())
}

/// Checks that there are enough licensed drivers for every group.
pub fn check_drivers(problem: &AllocationProblem, policy: &SeatPolicy) -> Result<(), AllocationError> {
    let groups = policy.group_count(problem.num_people());
    let licensed = problem.num_licensed();
    let required = policy.required_drivers(groups);
    if licensed < required {
        return Err(AllocationError::InsufficientDrivers { licensed, required });
    }
    Ok(())
}

/// Compiles a problem into its layered flow network.
///
/// Fails before building anything if a preference list is malformed or
/// there are too few licensed drivers.
pub fn compile(
    problem: &AllocationProblem,
    policy: &SeatPolicy,
) -> Result<CompiledNetwork, AllocationError> {
    let people = problem.num_people();
    let groups = policy.group_count(people);

    check_preferences(problem, groups)?;
    check_drivers(problem, policy)?;

    let layout = NodeLayout::new(people, groups);
    let mut network = FlowNetwork::new(layout.node_count());

    for person in problem.people() {
        network.add_edge(layout.source(), layout.person(person.id()), 1, 1)?;
    }

    for person in problem.people() {
        for &g in person.preferences() {
            let slot = if person.is_licensed() {
                layout.licensed_slot(g)
            } else {
                layout.open_slot(g)
            };
            network.add_edge(layout.person(person.id()), slot, 0, 1)?;
        }
    }

    let drivers = policy.min_drivers();
    for g in 0..groups {
        network.add_edge(layout.licensed_slot(g), layout.group(g), drivers, drivers)?;
        network.add_edge(layout.open_slot(g), layout.group(g), 0, policy.open_seats())?;
    }

    for g in 0..groups {
        network.add_edge(
            layout.group(g),
            layout.sink(),
            policy.min_occupants(),
            policy.max_occupants(),
        )?;
    }

    debug!(
        "compiled {} people into {} group(s): {} nodes, {} edges",
        people,
        groups,
        network.node_count(),
        network.edge_count()
    );

    Ok(CompiledNetwork {
        network,
        slot_owner: layout.slot_owners(),
        layout,
        policy: *policy,
        relaxed: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(prefs: Vec<Vec<usize>>, licensed: &[usize]) -> AllocationProblem {
        AllocationProblem::new(prefs, licensed).expect("valid problem")
    }

    #[test]
    fn test_compile_structure() {
        let p = problem(vec![vec![0, 1]; 7], &[0, 1, 2, 3]);
        let compiled = compile(&p, &SeatPolicy::default()).expect("compiles");
        let layout = compiled.layout();
        let net = compiled.network();

        assert_eq!(layout.groups(), 2);
        assert_eq!(net.node_count(), 7 + 3 * 2 + 2);
        // 7 source edges, 14 preference edges, 4 slot edges, 2 sink edges
        assert_eq!(net.edge_count(), 7 + 14 + 4 + 2);

        let source = net
            .edge(net.find_edge(layout.source(), 0).expect("source edge"))
            .expect("edge");
        assert_eq!((source.lower_bound, source.capacity), (1, 1));

        assert!(net.find_edge(0, layout.licensed_slot(1)).is_some());
        assert!(net.find_edge(0, layout.open_slot(1)).is_none());
        assert!(net.find_edge(5, layout.open_slot(0)).is_some());
        assert!(net.find_edge(5, layout.licensed_slot(0)).is_none());

        let lic = net
            .edge(
                net.find_edge(layout.licensed_slot(0), layout.group(0))
                    .expect("licensed edge"),
            )
            .expect("edge");
        assert_eq!((lic.lower_bound, lic.capacity), (2, 2));

        let open = net
            .edge(
                net.find_edge(layout.open_slot(0), layout.group(0))
                    .expect("open edge"),
            )
            .expect("edge");
        assert_eq!((open.lower_bound, open.capacity), (0, 3));

        let sink = net
            .edge(net.find_edge(layout.group(1), layout.sink()).expect("sink edge"))
            .expect("edge");
        assert_eq!((sink.lower_bound, sink.capacity), (2, 5));
    }

    #[test]
    fn test_slot_group_lookup() {
        let p = problem(vec![vec![0]; 6], &[0, 1, 2, 3]);
        let compiled = compile(&p, &SeatPolicy::default()).expect("compiles");
        let layout = compiled.layout();
        assert_eq!(compiled.slot_group(layout.licensed_slot(1)), Some(1));
        assert_eq!(compiled.slot_group(layout.open_slot(0)), Some(0));
        assert_eq!(compiled.slot_group(layout.group(0)), None);
        assert_eq!(compiled.slot_group(0), None);
        assert_eq!(compiled.slot_group(1000), None);
    }

    #[test]
    fn test_empty_preferences_rejected() {
        let p = problem(vec![vec![0], vec![]], &[0, 1]);
        assert_eq!(
            compile(&p, &SeatPolicy::default()).err(),
            Some(AllocationError::InvalidPreferences {
                person: 1,
                reason: PreferenceIssue::Empty
            })
        );
    }

    #[test]
    fn test_out_of_range_preference_rejected() {
        let p = problem(vec![vec![0], vec![1]], &[0, 1]);
        assert_eq!(
            compile(&p, &SeatPolicy::default()).err(),
            Some(AllocationError::InvalidPreferences {
                person: 1,
                reason: PreferenceIssue::OutOfRange {
                    group: 1,
                    groups: 1
                }
            })
        );
    }

    #[test]
    fn test_too_many_preferences_rejected() {
        let p = problem(vec![vec![0, 1, 2], vec![0]], &[0, 1]);
        assert_eq!(
            compile(&p, &SeatPolicy::default()).err(),
            Some(AllocationError::InvalidPreferences {
                person: 0,
                reason: PreferenceIssue::TooMany { len: 3, groups: 1 }
            })
        );
    }

    #[test]
    fn test_preferences_checked_before_drivers() {
        let p = problem(vec![vec![], vec![0]], &[]);
        assert!(matches!(
            compile(&p, &SeatPolicy::default()),
            Err(AllocationError::InvalidPreferences { .. })
        ));
    }

    #[test]
    fn test_insufficient_drivers() {
        let p = problem(vec![vec![0]; 6], &[0, 1, 2]);
        assert_eq!(
            compile(&p, &SeatPolicy::default()).err(),
            Some(AllocationError::InsufficientDrivers {
                licensed: 3,
                required: 4
            })
        );
    }

    #[test]
    fn test_relaxation_edges() {
        let p = problem(vec![vec![0]; 5], &[0, 1, 2]);
        let mut compiled = compile(&p, &SeatPolicy::default()).expect("compiles");
        let layout = compiled.layout();
        let before = compiled.network().edge_count();

        // three drivers, licensed slot admits two
        assert_eq!(compiled.solve(), 4);

        compiled.add_relaxation_edges().expect("relaxes");
        compiled.add_relaxation_edges().expect("idempotent");
        assert!(compiled.is_relaxed());
        assert_eq!(compiled.network().edge_count(), before + 1);
        let relax = compiled
            .network()
            .find_edge(layout.licensed_slot(0), layout.open_slot(0))
            .expect("relaxation edge");
        assert_eq!(compiled.network().edge(relax).map(|e| e.capacity), Some(3));

        assert_eq!(compiled.solve(), 1);
    }

    #[test]
    fn test_satisfy_lower_bounds_evens_out_groups() {
        // one driver per van, at least three riders each
        let policy = SeatPolicy::new(3, 5, 1).expect("valid");
        let p = problem(vec![vec![0, 1]; 6], &[0, 1]);
        let mut compiled = compile(&p, &policy).expect("compiles");
        let layout = compiled.layout();
        assert_eq!(compiled.solve(), 6);

        assert!(compiled.satisfy_lower_bounds().expect("in range"));
        let net = compiled.network();
        assert!(net.lower_bound_deficits().is_empty());
        assert_eq!(net.flow(layout.group(0), layout.sink()), 3);
        assert_eq!(net.flow(layout.group(1), layout.sink()), 3);
    }

    #[test]
    fn test_custom_policy_shapes_capacities() {
        let policy = SeatPolicy::new(1, 3, 1).expect("valid");
        let p = problem(vec![vec![0, 1]; 6], &[0, 1]);
        let compiled = compile(&p, &policy).expect("compiles");
        let layout = compiled.layout();
        let net = compiled.network();
        assert_eq!(layout.groups(), 2);
        let lic = net
            .find_edge(layout.licensed_slot(0), layout.group(0))
            .and_then(|e| net.edge(e))
            .expect("edge");
        assert_eq!((lic.lower_bound, lic.capacity), (1, 1));
        let open = net
            .find_edge(layout.open_slot(1), layout.group(1))
            .and_then(|e| net.edge(e))
            .expect("edge");
        assert_eq!(open.capacity, 2);
    }
}

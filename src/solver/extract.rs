//! Roster extraction from a solved network.

use crate::compiler::CompiledNetwork;
use crate::models::Roster;

/// Reads person → slot edges carrying flow and builds one roster per group.
///
/// A person is appended once for every such edge, so a misrouted flow shows
/// up as a duplicate or a missing person rather than being silently
/// corrected; [`AllocationValidator`](crate::evaluation::AllocationValidator)
/// reports either case.
///
/// # Examples
///
/// ```
/// use u_carpool::compiler::compile;
/// use u_carpool::models::{AllocationProblem, SeatPolicy};
/// use u_carpool::solver::extract_rosters;
///
/// let problem = AllocationProblem::new(vec![vec![0]; 3], &[0, 1]).unwrap();
/// let mut compiled = compile(&problem, &SeatPolicy::default()).unwrap();
/// compiled.solve();
///
/// let rosters = extract_rosters(&compiled);
/// assert_eq!(rosters.len(), 1);
/// assert_eq!(rosters[0].members(), &[0, 1, 2]);
/// ```
pub fn extract_rosters(compiled: &CompiledNetwork) -> Vec<Roster> {
    let layout = compiled.layout();
    let network = compiled.network();
    let mut rosters: Vec<Roster> = (0..layout.groups()).map(Roster::new).collect();

    for person in 0..layout.people() {
        for edge in network.outgoing(layout.person(person)) {
            if edge.flow == 0 {
                continue;
            }
            if let Some(group) = compiled.slot_group(edge.to) {
                rosters[group].push(person);
            }
        }
    }

    rosters
}

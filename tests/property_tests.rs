//! Property-based tests for the allocator.
//!
//! Instances use the default seat policy (2 to 5 people, 2 drivers) with
//! every preference inside the group count, so the only ways to fail are
//! driver shortages and genuinely incompatible preferences.

use proptest::prelude::*;
use std::collections::BTreeSet;

use u_carpool::models::{Allocation, AllocationProblem, SeatPolicy};
use u_carpool::solver::Allocator;

/// Preference lists and license flags for 2 to 20 people.
fn instance_strategy() -> impl Strategy<Value = (Vec<Vec<usize>>, Vec<bool>)> {
    (2usize..=20).prop_flat_map(|n| {
        let groups = n.div_ceil(5);
        let prefs = prop::collection::vec(
            (prop::collection::vec(any::<bool>(), groups), 0..groups),
            n,
        )
        .prop_map(|masks| {
            masks
                .into_iter()
                .map(|(mask, fallback)| {
                    let mut chosen: Vec<usize> = mask
                        .iter()
                        .enumerate()
                        .filter(|(_, &on)| on)
                        .map(|(g, _)| g)
                        .collect();
                    if chosen.is_empty() {
                        chosen.push(fallback);
                    }
                    chosen
                })
                .collect::<Vec<_>>()
        });
        (prefs, prop::collection::vec(any::<bool>(), n))
    })
}

fn build(prefs: Vec<Vec<usize>>, flags: &[bool]) -> AllocationProblem {
    let licensed: Vec<usize> = flags
        .iter()
        .enumerate()
        .filter(|(_, &f)| f)
        .map(|(i, _)| i)
        .collect();
    AllocationProblem::new(prefs, &licensed).expect("well formed")
}

fn check(problem: &AllocationProblem, allocation: &Allocation) -> Result<(), TestCaseError> {
    let policy = SeatPolicy::default();
    prop_assert_eq!(
        allocation.num_groups(),
        policy.group_count(problem.num_people())
    );
    let mut seen = BTreeSet::new();
    for (g, roster) in allocation.rosters().iter().enumerate() {
        prop_assert!(policy.admits_size(roster.len()));
        let drivers = roster
            .members()
            .iter()
            .filter(|&&p| problem.is_licensed(p))
            .count();
        prop_assert!(drivers >= policy.min_drivers() as usize);
        for &p in roster.members() {
            prop_assert!(problem.person(p).prefers(g));
            prop_assert!(seen.insert(p));
        }
    }
    prop_assert_eq!(seen.len(), problem.num_people());
    Ok(())
}

proptest! {
    /// Any returned allocation satisfies every rule.
    #[test]
    fn returned_allocations_are_valid((prefs, flags) in instance_strategy()) {
        let problem = build(prefs, &flags);
        if let Some(allocation) = Allocator::default().allocate(&problem) {
            check(&problem, &allocation)?;
        }
    }

    /// Too few license holders can never be allocated.
    #[test]
    fn driver_shortage_is_infeasible((prefs, flags) in instance_strategy()) {
        let problem = build(prefs, &flags);
        let required = SeatPolicy::default()
            .required_drivers(SeatPolicy::default().group_count(problem.num_people()));
        if problem.num_licensed() < required {
            prop_assert!(Allocator::default().allocate(&problem).is_none());
        }
    }

    /// With unrestricted preferences, enough drivers always suffice.
    #[test]
    fn open_preferences_with_enough_drivers_succeed(
        n in 2usize..=20,
        extra in 0usize..=20,
    ) {
        let groups = n.div_ceil(5);
        let licensed: Vec<usize> = (0..(2 * groups + extra).min(n)).collect();
        prop_assume!(licensed.len() >= 2 * groups);
        let problem = AllocationProblem::new(vec![(0..groups).collect::<Vec<_>>(); n], &licensed)
            .expect("well formed");
        let allocation = Allocator::default().allocate(&problem);
        prop_assert!(allocation.is_some());
        if let Some(allocation) = allocation {
            check(&problem, &allocation)?;
        }
    }

    /// Solving the same problem twice gives the same answer.
    #[test]
    fn allocation_is_deterministic((prefs, flags) in instance_strategy()) {
        let problem = build(prefs, &flags);
        let allocator = Allocator::default();
        prop_assert_eq!(allocator.allocate(&problem), allocator.allocate(&problem));
    }
}

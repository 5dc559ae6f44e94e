//! Two-phase feasibility orchestration.
//!
//! # Algorithm
//!
//! 1. Compile the problem (rejecting malformed preferences and driver
//!    shortages up front).
//! 2. Phase 1: max flow on the layered network. Drivers may only enter a
//!    group through its licensed slot, which admits exactly the required
//!    driver count.
//! 3. Phase 2, only if phase 1 left someone unplaced: add a licensed-slot →
//!    open-slot edge per group so surplus drivers can take ordinary seats,
//!    and continue the max flow on the same network.
//! 4. If the flow still does not cover everyone, fail.
//! 5. If the full flow leaves an edge below its lower bound (a group short
//!    of its minimum occupancy, say), rebalance it into a flow that meets
//!    every bound, failing if there is none.
//! 6. Extract the rosters and validate them; any violation is a failure.

use log::{debug, warn};

use super::extract::extract_rosters;
use crate::compiler::compile;
use crate::error::{AllocationError, ProblemError};
use crate::evaluation::AllocationValidator;
use crate::models::{Allocation, AllocationProblem, SeatPolicy};

/// Allocator settings.
///
/// # Examples
///
/// ```
/// use u_carpool::models::SeatPolicy;
/// use u_carpool::solver::AllocatorConfig;
///
/// let config = AllocatorConfig::default()
///     .with_seat_policy(SeatPolicy::new(2, 4, 1).unwrap())
///     .without_driver_relaxation();
/// assert_eq!(config.seat_policy().max_occupants(), 4);
/// assert!(!config.driver_relaxation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocatorConfig {
    seat_policy: SeatPolicy,
    driver_relaxation: bool,
}

impl AllocatorConfig {
    /// Sets the seat policy applied to every group.
    pub fn with_seat_policy(mut self, policy: SeatPolicy) -> Self {
        self.seat_policy = policy;
        self
    }

    /// Disables the second solve phase.
    pub fn without_driver_relaxation(mut self) -> Self {
        self.driver_relaxation = false;
        self
    }

    /// Seat policy.
    pub fn seat_policy(&self) -> &SeatPolicy {
        &self.seat_policy
    }

    /// Whether surplus drivers may take open seats in a second phase.
    pub fn driver_relaxation(&self) -> bool {
        self.driver_relaxation
    }
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            seat_policy: SeatPolicy::default(),
            driver_relaxation: true,
        }
    }
}

/// Assigns people to the fewest groups allowed by the seat policy.
///
/// Each call builds and owns its own network, so an `Allocator` can be
/// shared freely between threads.
///
/// # Examples
///
/// ```
/// use u_carpool::models::AllocationProblem;
/// use u_carpool::solver::Allocator;
///
/// let problem = AllocationProblem::new(vec![vec![0, 1]; 7], &[0, 1, 2, 3]).unwrap();
/// let allocation = Allocator::default().allocate(&problem).unwrap();
/// assert_eq!(allocation.num_groups(), 2);
/// assert_eq!(allocation.num_assigned(), 7);
///
/// let short = AllocationProblem::new(vec![vec![0]; 4], &[0]).unwrap();
/// assert!(Allocator::default().allocate(&short).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Allocator {
    config: AllocatorConfig,
}

impl Allocator {
    /// Creates an allocator with the given configuration.
    pub fn new(config: AllocatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Allocates everyone, or returns `None` if no valid allocation was found.
    pub fn allocate(&self, problem: &AllocationProblem) -> Option<Allocation> {
        match self.try_allocate(problem) {
            Ok(allocation) => Some(allocation),
            Err(e) => {
                debug!("no allocation: {e}");
                None
            }
        }
    }

    /// Allocates everyone, reporting which rule failed otherwise.
    pub fn try_allocate(&self, problem: &AllocationProblem) -> Result<Allocation, AllocationError> {
        let policy = self.config.seat_policy();
        let people = problem.num_people();

        let mut compiled = compile(problem, policy)?;

        let mut placed = compiled.solve() as usize;
        debug!("phase 1 placed {placed} of {people}");

        if placed < people && self.config.driver_relaxation() {
            compiled.add_relaxation_edges()?;
            let extra = compiled.solve() as usize;
            placed += extra;
            debug!("phase 2 placed {extra} more, {placed} of {people}");
        }

        if placed < people {
            return Err(AllocationError::Infeasible {
                assigned: placed,
                people,
            });
        }

        let deficits = compiled.network().lower_bound_deficits().len();
        if deficits > 0 {
            debug!("{deficits} edge(s) below their lower bound, rebalancing");
            if !compiled.satisfy_lower_bounds()? {
                return Err(AllocationError::UnmetMinimums { deficits });
            }
        }

        let allocation =
            Allocation::new(extract_rosters(&compiled)).with_relaxation(compiled.is_relaxed());

        let violations = AllocationValidator::new(problem, policy).validate(&allocation);
        if !violations.is_empty() {
            warn!(
                "full flow produced an invalid allocation: {:?}",
                violations.iter().map(|v| &v.kind).collect::<Vec<_>>()
            );
            return Err(AllocationError::ValidationFailed { violations });
        }

        Ok(allocation)
    }
}

/// Allocates people given per-person preference lists and license-holder
/// indices, using the default seat policy (2 to 5 people, 2 drivers).
///
/// Returns `Err` only for programmer errors (fewer than two people, license
/// indices out of range) and `Ok(None)` when no valid allocation exists.
///
/// # Examples
///
/// ```
/// let groups = u_carpool::allocate(vec![vec![0], vec![0]], &[0, 1])
///     .unwrap()
///     .unwrap()
///     .into_groups();
/// assert_eq!(groups, vec![vec![0, 1]]);
///
/// assert!(u_carpool::allocate(vec![vec![0], vec![]], &[0, 1]).unwrap().is_none());
/// assert!(u_carpool::allocate(vec![vec![0]], &[0]).is_err());
/// ```
pub fn allocate(
    preferences: Vec<Vec<usize>>,
    licensed: &[usize],
) -> Result<Option<Allocation>, ProblemError> {
    let problem = AllocationProblem::new(preferences, licensed)?;
    Ok(Allocator::default().allocate(&problem))
}

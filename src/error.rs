//! Error types.
//!
//! Programmer errors (malformed problem construction, invalid seat policy,
//! bad edge insertion) are separated from expected infeasibility, which is
//! reported through [`AllocationError`] and collapsed to `None` by
//! [`Allocator::allocate`](crate::solver::Allocator::allocate).

use thiserror::Error;

use crate::models::Violation;

/// Errors raised while building an [`AllocationProblem`](crate::models::AllocationProblem).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProblemError {
    /// At least two people are required to form a group.
    #[error("at least 2 people are required, got {count}")]
    TooFewPeople {
        /// Number of people supplied.
        count: usize,
    },

    /// A license index does not refer to any person.
    #[error("license index {index} is out of range for {people} people")]
    LicenseOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of people in the problem.
        people: usize,
    },

    /// A person's id does not match its position.
    #[error("person at position {position} has id {id}")]
    PersonIdMismatch {
        /// Position in the input sequence.
        position: usize,
        /// Id carried by the person.
        id: usize,
    },
}

/// Errors raised by [`SeatPolicy`](crate::models::SeatPolicy) construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PolicyError {
    /// A vehicle must seat at least one person.
    #[error("max_occupants must be at least 1")]
    NoSeats,

    /// Every vehicle needs at least one licensed driver.
    #[error("min_drivers must be at least 1")]
    NoDrivers,

    /// Minimum occupancy exceeds the seat count.
    #[error("min_occupants ({min}) exceeds max_occupants ({max})")]
    OccupancyBounds {
        /// Minimum occupants.
        min: u32,
        /// Maximum occupants.
        max: u32,
    },

    /// More drivers are required than the minimum occupancy.
    #[error("min_drivers ({drivers}) exceeds min_occupants ({min})")]
    DriverBounds {
        /// Required drivers.
        drivers: u32,
        /// Minimum occupants.
        min: u32,
    },
}

/// Errors raised by [`FlowNetwork::add_edge`](crate::flow::FlowNetwork::add_edge).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NetworkError {
    /// An endpoint is not a node of the network.
    #[error("node {node} is out of range for a network of {nodes} nodes")]
    NodeOutOfRange {
        /// Offending node.
        node: usize,
        /// Node count.
        nodes: usize,
    },

    /// The lower bound exceeds the capacity.
    #[error("lower bound {lower_bound} exceeds capacity {capacity}")]
    InvalidBounds {
        /// Lower bound.
        lower_bound: u32,
        /// Capacity.
        capacity: u32,
    },

    /// Edges from a node to itself are not allowed.
    #[error("self loop on node {node}")]
    SelfLoop {
        /// Node.
        node: usize,
    },
}

/// Why a preference list was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceIssue {
    /// No group was selected.
    #[error("no group selected")]
    Empty,
    /// More groups were selected than exist.
    #[error("{len} groups selected but only {groups} exist")]
    TooMany {
        /// Number of selected groups.
        len: usize,
        /// Number of groups.
        groups: usize,
    },
    /// A selected group does not exist.
    #[error("group {group} does not exist ({groups} groups)")]
    OutOfRange {
        /// Selected group index.
        group: usize,
        /// Number of groups.
        groups: usize,
    },
}

/// Reasons an allocation could not be produced.
///
/// Every variant means "no allocation possible" to a caller of
/// [`Allocator::allocate`](crate::solver::Allocator::allocate); the variants
/// exist for diagnostics through
/// [`Allocator::try_allocate`](crate::solver::Allocator::try_allocate).
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum AllocationError {
    /// A person's preference list is empty or names non-existent groups.
    #[error("person {person} has invalid preferences: {reason}")]
    InvalidPreferences {
        /// Person index.
        person: usize,
        /// What was wrong.
        reason: PreferenceIssue,
    },

    /// Too few licensed drivers for the number of groups.
    #[error("{licensed} licensed drivers available, {required} required")]
    InsufficientDrivers {
        /// Licensed people in the problem.
        licensed: usize,
        /// Drivers needed across all groups.
        required: usize,
    },

    /// Both solve phases ended without placing everyone.
    #[error("only {assigned} of {people} people could be placed")]
    Infeasible {
        /// People placed by the maximum flow.
        assigned: usize,
        /// People in the problem.
        people: usize,
    },

    /// Everyone was placed, but no placement meets every group's minimums.
    #[error("everyone fits, but {deficits} minimum(s) cannot be met")]
    UnmetMinimums {
        /// Edges below their lower bound before rebalancing.
        deficits: usize,
    },

    /// The extracted allocation broke a seat, driver, or coverage rule.
    #[error("allocation failed validation with {} violation(s)", violations.len())]
    ValidationFailed {
        /// Every violation found.
        violations: Vec<Violation>,
    },

    /// The flow model could not be built.
    #[error("flow network error: {0}")]
    Network(#[from] NetworkError),
}

impl AllocationError {
    /// Returns `true` if the failure was detected before any network was solved.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPreferences { .. } | Self::InsufficientDrivers { .. }
        )
    }
}

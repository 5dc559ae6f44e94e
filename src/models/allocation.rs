//! Allocation and violation types.

use serde::{Deserialize, Serialize};

use super::Roster;

/// A type of rule broken by an allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationType {
    /// The allocation does not have one roster per group.
    GroupCountMismatch {
        /// Rosters present.
        found: usize,
        /// Groups expected.
        expected: usize,
    },
    /// A group holds fewer people than the minimum occupancy.
    Undersized {
        /// Group index.
        group: usize,
        /// Assigned people.
        size: usize,
        /// Minimum occupancy.
        min: u32,
    },
    /// A group holds more people than it has seats.
    Oversized {
        /// Group index.
        group: usize,
        /// Assigned people.
        size: usize,
        /// Seats.
        max: u32,
    },
    /// A group has too few licensed drivers.
    InsufficientDrivers {
        /// Group index.
        group: usize,
        /// Licensed members.
        drivers: usize,
        /// Drivers required.
        required: u32,
    },
    /// A person was placed in a group they did not select.
    PreferenceIgnored {
        /// Person id.
        person: usize,
        /// Group index.
        group: usize,
    },
    /// A person appears in no roster.
    Unassigned {
        /// Person id.
        person: usize,
    },
    /// A person appears more than once across rosters.
    DuplicateAssignment {
        /// Person id.
        person: usize,
    },
    /// A roster names a person who does not exist.
    UnknownPerson {
        /// Offending id.
        person: usize,
    },
}

/// A rule violation in an allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A complete assignment of people to groups.
///
/// Holds one roster per group, ordered by group index.
///
/// # Examples
///
/// ```
/// use u_carpool::models::{Allocation, Roster};
///
/// let mut roster = Roster::new(0);
/// roster.push(0);
/// roster.push(1);
/// let allocation = Allocation::new(vec![roster]);
/// assert_eq!(allocation.num_groups(), 1);
/// assert_eq!(allocation.group_of(1), Some(0));
/// assert_eq!(allocation.into_groups(), vec![vec![0, 1]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    rosters: Vec<Roster>,
    relaxed: bool,
}

impl Allocation {
    /// Creates an allocation from rosters ordered by group index.
    pub fn new(rosters: Vec<Roster>) -> Self {
        Self {
            rosters,
            relaxed: false,
        }
    }

    /// Marks whether surplus drivers had to take open seats.
    pub fn with_relaxation(mut self, relaxed: bool) -> Self {
        self.relaxed = relaxed;
        self
    }

    /// Returns the rosters, ordered by group index.
    pub fn rosters(&self) -> &[Roster] {
        &self.rosters
    }

    /// Returns the roster of the given group, if it exists.
    pub fn roster(&self, group: usize) -> Option<&Roster> {
        self.rosters.get(group)
    }

    /// Number of groups.
    pub fn num_groups(&self) -> usize {
        self.rosters.len()
    }

    /// Total number of placements across all rosters.
    pub fn num_assigned(&self) -> usize {
        self.rosters.iter().map(Roster::len).sum()
    }

    /// Group holding `person`, if any.
    pub fn group_of(&self, person: usize) -> Option<usize> {
        self.rosters
            .iter()
            .find(|r| r.contains(person))
            .map(Roster::group)
    }

    /// Returns `true` if the second solve phase was needed.
    pub fn used_relaxation(&self) -> bool {
        self.relaxed
    }

    /// Consumes the allocation, returning member lists ordered by group index.
    pub fn into_groups(self) -> Vec<Vec<usize>> {
        self.rosters.into_iter().map(Roster::into_members).collect()
    }
}

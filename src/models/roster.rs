//! Roster type.

use serde::{Deserialize, Serialize};

/// The people assigned to a single group (vehicle), in assignment order.
///
/// # Examples
///
/// ```
/// use u_carpool::models::Roster;
///
/// let mut roster = Roster::new(1);
/// roster.push(4);
/// roster.push(0);
/// assert_eq!(roster.group(), 1);
/// assert_eq!(roster.members(), &[4, 0]);
/// assert!(roster.contains(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    group: usize,
    members: Vec<usize>,
}

impl Roster {
    /// Creates an empty roster for the given group.
    pub fn new(group: usize) -> Self {
        Self {
            group,
            members: Vec::new(),
        }
    }

    /// Appends a person to this roster.
    pub fn push(&mut self, person: usize) {
        self.members.push(person);
    }

    /// Group index.
    pub fn group(&self) -> usize {
        self.group
    }

    /// Assigned person ids.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Number of assigned people.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if nobody is assigned.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if `person` is assigned to this group.
    pub fn contains(&self, person: usize) -> bool {
        self.members.contains(&person)
    }

    /// Consumes the roster, returning the member list.
    pub fn into_members(self) -> Vec<usize> {
        self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_empty() {
        let r = Roster::new(0);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.group(), 0);
    }

    #[test]
    fn test_roster_push() {
        let mut r = Roster::new(2);
        r.push(5);
        r.push(3);
        assert_eq!(r.len(), 2);
        assert_eq!(r.members(), &[5, 3]);
        assert!(!r.contains(4));
        assert_eq!(r.into_members(), vec![5, 3]);
    }
}

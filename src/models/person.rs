//! Person type.

use serde::{Deserialize, Serialize};

/// A participant to be seated in one of the groups.
///
/// Preferences are an ordered set of acceptable group indices: duplicates
/// are dropped on construction, keeping the first occurrence.
///
/// # Examples
///
/// ```
/// use u_carpool::models::Person;
///
/// let p = Person::new(0, [1, 0, 1], true);
/// assert_eq!(p.id(), 0);
/// assert_eq!(p.preferences(), &[1, 0]);
/// assert!(p.is_licensed());
/// assert!(p.prefers(0));
/// assert!(!p.prefers(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: usize,
    preferences: Vec<usize>,
    licensed: bool,
}

impl Person {
    /// Creates a person with the given id, acceptable groups, and license flag.
    pub fn new(id: usize, preferences: impl IntoIterator<Item = usize>, licensed: bool) -> Self {
        let mut unique = Vec::new();
        for group in preferences {
            if !unique.contains(&group) {
                unique.push(group);
            }
        }
        Self {
            id,
            preferences: unique,
            licensed,
        }
    }

    /// Person index (0..N).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Acceptable group indices, in the order given.
    pub fn preferences(&self) -> &[usize] {
        &self.preferences
    }

    /// Returns `true` if this person holds a driving license.
    pub fn is_licensed(&self) -> bool {
        self.licensed
    }

    /// Returns `true` if `group` is one of this person's acceptable groups.
    pub fn prefers(&self, group: usize) -> bool {
        self.preferences.contains(&group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_new() {
        let p = Person::new(3, vec![0, 2], false);
        assert_eq!(p.id(), 3);
        assert_eq!(p.preferences(), &[0, 2]);
        assert!(!p.is_licensed());
    }

    #[test]
    fn test_person_dedups_preferences() {
        let p = Person::new(0, [2, 1, 2, 1, 0], true);
        assert_eq!(p.preferences(), &[2, 1, 0]);
    }

    #[test]
    fn test_person_empty_preferences() {
        let p = Person::new(0, Vec::new(), true);
        assert!(p.preferences().is_empty());
        assert!(!p.prefers(0));
    }
}

//! Allocation problem instance.

use serde::Serialize;

use super::Person;
use crate::error::ProblemError;

/// A carpool allocation problem: people with group preferences and license flags.
///
/// Construction only rejects programmer errors (fewer than two people,
/// license indices that name nobody). Preference lists are accepted as
/// given and checked when the problem is compiled, so that an empty or
/// out-of-range selection is reported as an ordinary infeasible outcome.
///
/// # Examples
///
/// ```
/// use u_carpool::models::AllocationProblem;
///
/// let problem = AllocationProblem::new(
///     vec![vec![0], vec![0], vec![0]],
///     &[0, 2],
/// ).unwrap();
/// assert_eq!(problem.num_people(), 3);
/// assert_eq!(problem.num_licensed(), 2);
/// assert!(problem.person(2).is_licensed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationProblem {
    people: Vec<Person>,
}

impl AllocationProblem {
    /// Builds a problem from per-person preference lists and license-holder indices.
    ///
    /// Duplicate license indices are ignored.
    pub fn new(preferences: Vec<Vec<usize>>, licensed: &[usize]) -> Result<Self, ProblemError> {
        let count = preferences.len();
        if count < 2 {
            return Err(ProblemError::TooFewPeople { count });
        }
        let mut flags = vec![false; count];
        for &index in licensed {
            if index >= count {
                return Err(ProblemError::LicenseOutOfRange {
                    index,
                    people: count,
                });
            }
            flags[index] = true;
        }
        let people = preferences
            .into_iter()
            .zip(flags)
            .enumerate()
            .map(|(id, (prefs, flag))| Person::new(id, prefs, flag))
            .collect();
        Ok(Self { people })
    }

    /// Builds a problem from already constructed people.
    ///
    /// Person ids must equal their positions.
    pub fn from_people(people: Vec<Person>) -> Result<Self, ProblemError> {
        if people.len() < 2 {
            return Err(ProblemError::TooFewPeople {
                count: people.len(),
            });
        }
        if let Some((position, p)) = people.iter().enumerate().find(|(i, p)| p.id() != *i) {
            return Err(ProblemError::PersonIdMismatch {
                position,
                id: p.id(),
            });
        }
        Ok(Self { people })
    }

    /// All people, indexed by id.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Returns the person with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn person(&self, id: usize) -> &Person {
        &self.people[id]
    }

    /// Number of people.
    pub fn num_people(&self) -> usize {
        self.people.len()
    }

    /// Number of license holders.
    pub fn num_licensed(&self) -> usize {
        self.people.iter().filter(|p| p.is_licensed()).count()
    }

    /// Ids of license holders, ascending.
    pub fn licensed_ids(&self) -> Vec<usize> {
        self.people
            .iter()
            .filter(|p| p.is_licensed())
            .map(Person::id)
            .collect()
    }

    /// Returns `true` if `id` names a license holder.
    pub fn is_licensed(&self, id: usize) -> bool {
        self.people.get(id).is_some_and(Person::is_licensed)
    }
}

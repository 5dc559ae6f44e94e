//! Allocation validator that checks seats, drivers, preferences, and coverage.

use crate::models::{Allocation, AllocationProblem, SeatPolicy, Violation, ViolationType};

/// Checks an allocation against the problem it was built for.
///
/// Every rule is checked independently of how the allocation was produced,
/// so the result can be trusted even if the flow model misroutes someone.
///
/// # Examples
///
/// ```
/// use u_carpool::models::{Allocation, AllocationProblem, Roster, SeatPolicy};
/// use u_carpool::evaluation::AllocationValidator;
///
/// let problem = AllocationProblem::new(vec![vec![0], vec![0]], &[0, 1]).unwrap();
/// let policy = SeatPolicy::default();
/// let validator = AllocationValidator::new(&problem, &policy);
///
/// let mut roster = Roster::new(0);
/// roster.push(0);
/// roster.push(1);
/// assert!(validator.validate(&Allocation::new(vec![roster])).is_empty());
///
/// let mut lonely = Roster::new(0);
/// lonely.push(0);
/// assert!(!validator.is_valid(&Allocation::new(vec![lonely])));
/// ```
pub struct AllocationValidator<'a> {
    problem: &'a AllocationProblem,
    policy: &'a SeatPolicy,
}

impl<'a> AllocationValidator<'a> {
    /// Creates a validator for the given problem and seat policy.
    pub fn new(problem: &'a AllocationProblem, policy: &'a SeatPolicy) -> Self {
        Self { problem, policy }
    }

    /// Returns every violation found; empty means the allocation is valid.
    pub fn validate(&self, allocation: &Allocation) -> Vec<Violation> {
        let mut violations = Vec::new();
        let people = self.problem.num_people();
        let expected = self.policy.group_count(people);

        if allocation.num_groups() != expected {
            violations.push(Violation::new(ViolationType::GroupCountMismatch {
                found: allocation.num_groups(),
                expected,
            }));
        }

        let mut placements = vec![0usize; people];

        for (group, roster) in allocation.rosters().iter().enumerate() {
            let size = roster.len();
            if size < self.policy.min_occupants() as usize {
                violations.push(Violation::new(ViolationType::Undersized {
                    group,
                    size,
                    min: self.policy.min_occupants(),
                }));
            }
            if size > self.policy.max_occupants() as usize {
                violations.push(Violation::new(ViolationType::Oversized {
                    group,
                    size,
                    max: self.policy.max_occupants(),
                }));
            }

            let mut drivers = 0;
            for &person in roster.members() {
                if person >= people {
                    violations.push(Violation::new(ViolationType::UnknownPerson { person }));
                    continue;
                }
                placements[person] += 1;
                if self.problem.is_licensed(person) {
                    drivers += 1;
                }
                if !self.problem.person(person).prefers(group) {
                    violations.push(Violation::new(ViolationType::PreferenceIgnored {
                        person,
                        group,
                    }));
                }
            }

            if drivers < self.policy.min_drivers() as usize {
                violations.push(Violation::new(ViolationType::InsufficientDrivers {
                    group,
                    drivers,
                    required: self.policy.min_drivers(),
                }));
            }
        }

        for (person, &count) in placements.iter().enumerate() {
            match count {
                0 => violations.push(Violation::new(ViolationType::Unassigned { person })),
                1 => {}
                _ => violations.push(Violation::new(ViolationType::DuplicateAssignment { person })),
            }
        }

        violations
    }

    /// Returns `true` if the allocation breaks no rule.
    pub fn is_valid(&self, allocation: &Allocation) -> bool {
        self.validate(allocation).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Roster;

    fn roster(group: usize, members: &[usize]) -> Roster {
        let mut r = Roster::new(group);
        for &m in members {
            r.push(m);
        }
        r
    }

    fn setup() -> (AllocationProblem, SeatPolicy) {
        // 7 people, 2 groups, drivers 0..=3; person 6 only accepts group 1
        let mut prefs = vec![vec![0, 1]; 7];
        prefs[6] = vec![1];
        let problem = AllocationProblem::new(prefs, &[0, 1, 2, 3]).expect("valid");
        (problem, SeatPolicy::default())
    }

    #[test]
    fn test_valid_allocation() {
        let (problem, policy) = setup();
        let validator = AllocationValidator::new(&problem, &policy);
        let a = Allocation::new(vec![roster(0, &[0, 1, 4]), roster(1, &[2, 3, 5, 6])]);
        assert!(validator.validate(&a).is_empty());
    }

    #[test]
    fn test_undersized_and_missing_drivers() {
        let (problem, policy) = setup();
        let validator = AllocationValidator::new(&problem, &policy);
        let a = Allocation::new(vec![roster(0, &[4]), roster(1, &[0, 1, 2, 3, 5, 6])]);
        let violations = validator.validate(&a);
        assert!(violations.contains(&Violation::new(ViolationType::Undersized {
            group: 0,
            size: 1,
            min: 2,
        })));
        assert!(violations.contains(&Violation::new(ViolationType::InsufficientDrivers {
            group: 0,
            drivers: 0,
            required: 2,
        })));
        assert!(violations.contains(&Violation::new(ViolationType::Oversized {
            group: 1,
            size: 6,
            max: 5,
        })));
    }

    #[test]
    fn test_preference_ignored() {
        let (problem, policy) = setup();
        let validator = AllocationValidator::new(&problem, &policy);
        let a = Allocation::new(vec![roster(0, &[0, 1, 6]), roster(1, &[2, 3, 4, 5])]);
        assert_eq!(
            validator.validate(&a),
            vec![Violation::new(ViolationType::PreferenceIgnored {
                person: 6,
                group: 0
            })]
        );
    }

    #[test]
    fn test_coverage() {
        let (problem, policy) = setup();
        let validator = AllocationValidator::new(&problem, &policy);
        let a = Allocation::new(vec![roster(0, &[0, 1, 4, 5]), roster(1, &[2, 3, 5, 6])]);
        let violations = validator.validate(&a);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].kind,
            ViolationType::DuplicateAssignment { person: 5 }
        );

        let a = Allocation::new(vec![roster(0, &[0, 1]), roster(1, &[2, 3, 5, 6])]);
        assert_eq!(
            validator.validate(&a),
            vec![Violation::new(ViolationType::Unassigned { person: 4 })]
        );
    }

    #[test]
    fn test_group_count_and_unknown_person() {
        let (problem, policy) = setup();
        let validator = AllocationValidator::new(&problem, &policy);
        let a = Allocation::new(vec![roster(0, &[0, 1, 2, 3, 9])]);
        let violations = validator.validate(&a);
        assert!(violations.contains(&Violation::new(ViolationType::GroupCountMismatch {
            found: 1,
            expected: 2,
        })));
        assert!(violations.contains(&Violation::new(ViolationType::UnknownPerson { person: 9 })));
        assert!(!validator.is_valid(&a));
    }
}

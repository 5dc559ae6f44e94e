//! Seat policy shared by every vehicle.

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// Occupancy and safety rules applied to every group (vehicle).
///
/// The group count for `n` people is `ceil(n / max_occupants)`, i.e. the
/// fewest vehicles that can seat everyone.
///
/// # Examples
///
/// ```
/// use u_carpool::models::SeatPolicy;
///
/// let policy = SeatPolicy::default();
/// assert_eq!(policy.max_occupants(), 5);
/// assert_eq!(policy.group_count(7), 2);
/// assert_eq!(policy.required_drivers(2), 4);
///
/// assert!(SeatPolicy::new(3, 2, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSeatPolicy")]
pub struct SeatPolicy {
    min_occupants: u32,
    max_occupants: u32,
    min_drivers: u32,
}

impl SeatPolicy {
    /// Creates a seat policy.
    ///
    /// Requires `max_occupants >= 1`, `min_drivers >= 1` and
    /// `min_drivers <= min_occupants <= max_occupants`.
    pub fn new(min_occupants: u32, max_occupants: u32, min_drivers: u32) -> Result<Self, PolicyError> {
        if max_occupants == 0 {
            return Err(PolicyError::NoSeats);
        }
        if min_drivers == 0 {
            return Err(PolicyError::NoDrivers);
        }
        if min_occupants > max_occupants {
            return Err(PolicyError::OccupancyBounds {
                min: min_occupants,
                max: max_occupants,
            });
        }
        if min_drivers > min_occupants {
            return Err(PolicyError::DriverBounds {
                drivers: min_drivers,
                min: min_occupants,
            });
        }
        Ok(Self {
            min_occupants,
            max_occupants,
            min_drivers,
        })
    }

    /// Fewest people allowed in a group.
    pub fn min_occupants(&self) -> u32 {
        self.min_occupants
    }

    /// Seats per group.
    pub fn max_occupants(&self) -> u32 {
        self.max_occupants
    }

    /// Licensed drivers required in every group.
    pub fn min_drivers(&self) -> u32 {
        self.min_drivers
    }

    /// Seats left once the required drivers are seated.
    pub fn open_seats(&self) -> u32 {
        self.max_occupants - self.min_drivers
    }

    /// Number of groups needed for `people` participants.
    pub fn group_count(&self, people: usize) -> usize {
        people.div_ceil(self.max_occupants as usize)
    }

    /// Licensed drivers needed across `groups` groups.
    pub fn required_drivers(&self, groups: usize) -> usize {
        groups * self.min_drivers as usize
    }

    /// Returns `true` if a group of `size` people is within bounds.
    pub fn admits_size(&self, size: usize) -> bool {
        size >= self.min_occupants as usize && size <= self.max_occupants as usize
    }
}

impl Default for SeatPolicy {
    fn default() -> Self {
        Self {
            min_occupants: 2,
            max_occupants: 5,
            min_drivers: 2,
        }
    }
}

#[derive(Deserialize)]
struct RawSeatPolicy {
    min_occupants: u32,
    max_occupants: u32,
    min_drivers: u32,
}

impl TryFrom<RawSeatPolicy> for SeatPolicy {
    type Error = PolicyError;

    fn try_from(raw: RawSeatPolicy) -> Result<Self, Self::Error> {
        Self::new(raw.min_occupants, raw.max_occupants, raw.min_drivers)
    }
}

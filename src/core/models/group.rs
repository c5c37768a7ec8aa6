//! Group (section) model: a concrete offering of a [`Course`](super::Course).

use super::{CourseId, Meeting};
use serde::{Deserialize, Serialize};

/// Identity type for a [`Group`].
pub type GroupId = u32;

/// A concrete section of a course, with instructor, capacity, and meetings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Unique group id.
    pub id: GroupId,
    /// The course this group is a section of.
    pub course_id: CourseId,
    /// Instructor name.
    pub instructor: String,
    /// Maximum enrollment capacity.
    pub max_capacity: u32,
    /// Current enrollment count.
    pub current_enrollment: u32,
    /// Weekly meeting pattern.
    pub meetings: Vec<Meeting>,
}

/// Fraction of `max_capacity` beyond which a group is considered full,
/// representing slack for manual registrar overrides.
const CAPACITY_SLACK: f32 = 1.1;

impl Group {
    /// Create a new group.
    #[must_use]
    pub fn new(
        id: GroupId,
        course_id: CourseId,
        instructor: impl Into<String>,
        max_capacity: u32,
        current_enrollment: u32,
        meetings: Vec<Meeting>,
    ) -> Self {
        Self {
            id,
            course_id,
            instructor: instructor.into(),
            max_capacity,
            current_enrollment,
            meetings,
        }
    }

    /// A group "has capacity" when `current_enrollment < 1.1 * max_capacity`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn has_capacity(&self) -> bool {
        (self.current_enrollment as f32) < CAPACITY_SLACK * (self.max_capacity as f32)
    }

    /// Whether any meeting of `self` overlaps any meeting of `other`.
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.meetings
            .iter()
            .any(|m| other.meetings.iter().any(|om| m.overlaps(om)))
    }

    /// Total weekly contact hours across all meetings.
    #[must_use]
    pub fn weekly_hours(&self) -> u32 {
        self.meetings.iter().map(|m| u32::from(m.duration())).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meeting(day: u8, start: u8, end: u8) -> Meeting {
        Meeting::new(day, start, end, "A203")
    }

    #[test]
    fn test_has_capacity() {
        let g = Group::new(1, 1, "Smith", 30, 29, vec![]);
        assert!(g.has_capacity());
    }

    #[test]
    fn test_capacity_slack() {
        // 30 * 1.1 = 33, so 32 still has capacity, 33 does not.
        let g = Group::new(1, 1, "Smith", 30, 32, vec![]);
        assert!(g.has_capacity());
        let full = Group::new(2, 1, "Smith", 30, 33, vec![]);
        assert!(!full.has_capacity());
    }

    #[test]
    fn test_conflicts_with() {
        let a = Group::new(1, 1, "Smith", 30, 0, vec![meeting(1, 9, 11)]);
        let b = Group::new(2, 2, "Lee", 30, 0, vec![meeting(1, 10, 12)]);
        let c = Group::new(3, 3, "Diaz", 30, 0, vec![meeting(2, 9, 11)]);
        assert!(a.conflicts_with(&b));
        assert!(!a.conflicts_with(&c));
    }

    #[test]
    fn test_weekly_hours() {
        let g = Group::new(
            1,
            1,
            "Smith",
            30,
            0,
            vec![meeting(1, 9, 11), meeting(3, 9, 11)],
        );
        assert_eq!(g.weekly_hours(), 4);
    }
}

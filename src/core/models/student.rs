//! Student record and preferences.

use super::CourseId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identity type for a [`Student`].
pub type StudentId = u32;

/// Whether a student progresses on the nominal plan or is taking courses
/// off-plan subject to prerequisites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentStatus {
    /// Progressing on the nominal plan; takes exactly the courses of their
    /// current term.
    Regular,
    /// Off-plan; may take courses from any prior or current term subject to
    /// prerequisites.
    Irregular,
}

/// Preferred time-of-day band for class scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    /// [8, 12)
    Morning,
    /// [12, 18)
    Afternoon,
    /// [18, ∞)
    Evening,
}

impl TimeOfDay {
    /// Whether `start_hour` falls within this preference's band.
    #[must_use]
    pub const fn matches(self, start_hour: u8) -> bool {
        match self {
            Self::Morning => start_hour >= 8 && start_hour < 12,
            Self::Afternoon => start_hour >= 12 && start_hour < 18,
            Self::Evening => start_hour >= 18,
        }
    }
}

/// A student's scheduling preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Preferred time-of-day band.
    pub time_of_day: TimeOfDay,
    /// Preferred days of the week (subset of 1..5).
    pub preferred_days: HashSet<u8>,
}

impl Preferences {
    /// Create a new preferences value.
    #[must_use]
    pub fn new(time_of_day: TimeOfDay, preferred_days: HashSet<u8>) -> Self {
        Self {
            time_of_day,
            preferred_days,
        }
    }
}

/// A student's record: identity, progress, and preferences.
///
/// The Trajectory Planner deep-copies a `Student` into a virtual snapshot
/// carrying a scratch `simulated_enrollments` set, used only during forward
/// simulation and never observed by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student id.
    pub id: StudentId,
    /// Display name.
    pub name: String,
    /// Current term (1..10).
    pub current_term: u8,
    /// Regular or irregular track.
    pub status: StudentStatus,
    /// Credits accumulated so far.
    pub credits_accumulated: f32,
    /// Maximum credits the student may carry in a single term.
    pub credit_cap: f32,
    /// Courses the student has already completed/approved.
    pub approved: HashSet<CourseId>,
    /// Scheduling preferences.
    pub preferences: Preferences,
    /// Scratch field used only by the Trajectory Planner's forward
    /// simulation; empty on student records owned by callers.
    #[serde(default)]
    pub simulated_enrollments: HashSet<CourseId>,
}

impl Student {
    /// Create a new student record with no simulated enrollments.
    #[must_use]
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        current_term: u8,
        status: StudentStatus,
        credits_accumulated: f32,
        credit_cap: f32,
        approved: HashSet<CourseId>,
        preferences: Preferences,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            current_term,
            status,
            credits_accumulated,
            credit_cap,
            approved,
            preferences,
            simulated_enrollments: HashSet::new(),
        }
    }

    /// Deep-copy this student into a virtual snapshot for forward
    /// simulation, per §3 "Ownership & lifecycle".
    #[must_use]
    pub fn to_virtual(&self) -> Self {
        let mut virtual_student = self.clone();
        virtual_student.simulated_enrollments.clear();
        virtual_student
    }

    /// Whether `course_id` is already approved (real or simulated).
    #[must_use]
    pub fn has_approved(&self, course_id: CourseId) -> bool {
        self.approved.contains(&course_id)
    }

    /// Mark `course_id` approved in-place and record it as simulated.
    pub fn approve(&mut self, course_id: CourseId) {
        self.approved.insert(course_id);
        self.simulated_enrollments.insert(course_id);
    }

    /// Whether the student is on the regular track.
    #[must_use]
    pub const fn is_regular(&self) -> bool {
        matches!(self.status, StudentStatus::Regular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> Preferences {
        Preferences::new(TimeOfDay::Morning, HashSet::from([1, 3, 5]))
    }

    #[test]
    fn test_student_creation() {
        let s = Student::new(
            1,
            "Alice",
            1,
            StudentStatus::Regular,
            0.0,
            18.0,
            HashSet::new(),
            prefs(),
        );
        assert_eq!(s.current_term, 1);
        assert!(s.is_regular());
        assert!(s.simulated_enrollments.is_empty());
    }

    #[test]
    fn test_to_virtual_clears_simulated() {
        let mut s = Student::new(
            1,
            "Alice",
            1,
            StudentStatus::Regular,
            0.0,
            18.0,
            HashSet::new(),
            prefs(),
        );
        s.simulated_enrollments.insert(5);
        let v = s.to_virtual();
        assert!(v.simulated_enrollments.is_empty());
        assert_eq!(v.approved, s.approved);
    }

    #[test]
    fn test_approve_updates_both_sets() {
        let mut s = Student::new(
            1,
            "Alice",
            1,
            StudentStatus::Regular,
            0.0,
            18.0,
            HashSet::new(),
            prefs(),
        );
        s.approve(10);
        assert!(s.has_approved(10));
        assert!(s.simulated_enrollments.contains(&10));
    }

    #[test]
    fn test_time_of_day_matches() {
        assert!(TimeOfDay::Morning.matches(9));
        assert!(!TimeOfDay::Morning.matches(13));
        assert!(TimeOfDay::Evening.matches(20));
    }
}

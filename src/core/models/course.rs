//! Course model

use serde::{Deserialize, Serialize};

/// Identity type for a [`Course`].
pub type CourseId = u32;

/// The role a course plays in the curriculum, controlling eligibility and
/// scheduling rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseKind {
    /// An ordinary lecture/lab course.
    Regular,
    /// A capstone-style course whose eligibility depends on a set of
    /// thematic dependency courses beyond standard prerequisites.
    IntegratorProject,
    /// A full-time off-campus term, taken exclusively.
    Residency,
}

/// A course in the curriculum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course id.
    pub id: CourseId,

    /// Display name (e.g., "Data Structures and Algorithms").
    pub name: String,

    /// The curriculum term this course nominally belongs to (1..10).
    pub term: u8,

    /// Credit hours (can be fractional).
    pub credits: f32,

    /// Total contact hours across the term, used to derive weekly load.
    pub hours: f32,

    /// What role this course plays in eligibility/scheduling rules.
    pub kind: CourseKind,
}

impl Course {
    /// Create a new regular course.
    #[must_use]
    pub const fn new(id: CourseId, name: String, term: u8, credits: f32, hours: f32) -> Self {
        Self {
            id,
            name,
            term,
            credits,
            hours,
            kind: CourseKind::Regular,
        }
    }

    /// Create a course of a specific kind.
    #[must_use]
    pub const fn with_kind(
        id: CourseId,
        name: String,
        term: u8,
        credits: f32,
        hours: f32,
        kind: CourseKind,
    ) -> Self {
        Self {
            id,
            name,
            term,
            credits,
            hours,
            kind,
        }
    }

    /// Whether this course is a residency term.
    #[must_use]
    pub const fn is_residency(&self) -> bool {
        matches!(self.kind, CourseKind::Residency)
    }

    /// Whether this course is an integrator project (capstone).
    #[must_use]
    pub const fn is_integrator_project(&self) -> bool {
        matches!(self.kind, CourseKind::IntegratorProject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(1, "Discrete Structures".to_string(), 1, 4.0, 60.0);

        assert_eq!(course.id, 1);
        assert_eq!(course.name, "Discrete Structures");
        assert_eq!(course.term, 1);
        assert!((course.credits - 4.0).abs() < f32::EPSILON);
        assert_eq!(course.kind, CourseKind::Regular);
    }

    #[test]
    fn test_fractional_credits() {
        let course = Course::new(2, "Lab".to_string(), 1, 1.5, 22.5);
        assert!((course.credits - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_residency_kind() {
        let course = Course::with_kind(
            3,
            "Residency Term 6".to_string(),
            6,
            18.0,
            600.0,
            CourseKind::Residency,
        );
        assert!(course.is_residency());
        assert!(!course.is_integrator_project());
    }

    #[test]
    fn test_integrator_project_kind() {
        let course = Course::with_kind(
            4,
            "Capstone Project".to_string(),
            5,
            6.0,
            90.0,
            CourseKind::IntegratorProject,
        );
        assert!(course.is_integrator_project());
        assert!(!course.is_residency());
    }
}

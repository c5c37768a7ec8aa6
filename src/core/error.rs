//! Error taxonomy for the trajectory planner.
//!
//! Domain outcomes (empty eligibility, infeasible GA population, planner
//! stalls) are values carried in result structs, not exceptions — the core
//! does not retry and does not log (§7). The single exception is a malformed
//! catalog passed to [`Optimizer::new`](crate::core::optimizer::Optimizer::new):
//! that is a caller programming error and fails loudly via panic.

use crate::core::models::{Course, Group};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A descriptive, non-fatal warning surfaced alongside a partial or empty
/// result. Not an error type in the `std::error::Error` sense: callers are
/// expected to branch on the presence of a warning, not to propagate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Warning {
    /// No course was eligible for the student.
    EmptyEligibility,
    /// GA initialization could not produce a single constraint-satisfying
    /// individual.
    NoFeasibleIndividual,
    /// The trajectory planner hit its iteration cap with pending courses
    /// remaining.
    PlannerStall { terms_completed: u8 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEligibility => write!(f, "no course is eligible for this student"),
            Self::NoFeasibleIndividual => {
                write!(f, "no feasible schedule could be constructed under the given constraints")
            }
            Self::PlannerStall { terms_completed } => write!(
                f,
                "trajectory planning stalled after {terms_completed} terms with pending courses remaining"
            ),
        }
    }
}

/// Validate that a catalog is internally consistent. Panics (fail loudly,
/// per §7 `InvariantViolation`) on the first inconsistency found.
///
/// # Panics
/// Panics if a group references a course id absent from `courses`, or if a
/// non-residency group has no meetings.
pub fn validate_catalog(courses: &[Course], groups: &[Group]) {
    let course_ids: std::collections::HashSet<_> = courses.iter().map(|c| c.id).collect();
    for group in groups {
        assert!(
            course_ids.contains(&group.course_id),
            "InvariantViolation: group {} references unknown course {}",
            group.id,
            group.course_id
        );
        let owning_course = courses.iter().find(|c| c.id == group.course_id);
        if let Some(course) = owning_course {
            if !course.is_residency() {
                assert!(
                    !group.meetings.is_empty(),
                    "InvariantViolation: non-residency group {} has no meetings",
                    group.id
                );
            }
        }
    }
}

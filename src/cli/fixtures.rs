//! A small embedded sample curriculum, used by the CLI's demo subcommands.
//!
//! The core takes a caller-supplied catalog (§1: no CSV/wire format); this
//! crate has no curriculum loader, so the CLI ships one illustrative
//! 2-term curriculum with a term-3-style residency instead.

use trajplan::core::catalog::Catalog;
use trajplan::core::models::{Course, CourseKind, Group, Meeting, PrereqGraph, ProjectDepGraph};

/// The sample curriculum's raw parts, for building an [`Optimizer`](trajplan::core::Optimizer).
#[must_use]
pub fn sample_parts() -> (Vec<Course>, Vec<Group>, PrereqGraph, ProjectDepGraph) {
    let mut courses = Vec::new();
    let mut groups = Vec::new();

    for term in 1..=2u8 {
        for i in 0..5u32 {
            let id = u32::from(term) * 10 + i;
            courses.push(Course::new(id, format!("Term {term} Course {i}"), term, 4.0, 60.0));
            let day = u8::try_from(i % 5 + 1).unwrap_or(1);
            groups.push(Group::new(
                id * 100,
                id,
                "Staff",
                30,
                0,
                vec![Meeting::new(day, 9, 11, format!("A{id}"))],
            ));
            groups.push(Group::new(
                id * 100 + 1,
                id,
                "Staff",
                30,
                0,
                vec![Meeting::new(day, 14, 16, format!("B{id}"))],
            ));
        }
    }

    let residency_id = 300;
    courses.push(Course::with_kind(
        residency_id,
        "Residency".to_string(),
        3,
        18.0,
        600.0,
        CourseKind::Residency,
    ));
    groups.push(Group::new(residency_id * 100, residency_id, "N/A", 5, 0, vec![]));

    let mut prereqs = PrereqGraph::new();
    prereqs.add_prerequisite(20, 10);

    let project_deps = ProjectDepGraph::new();

    (courses, groups, prereqs, project_deps)
}

/// Build the sample catalog from [`sample_parts`].
#[must_use]
pub fn sample_catalog() -> Catalog {
    let (courses, groups, prereqs, project_deps) = sample_parts();
    Catalog::new(courses, groups, prereqs, project_deps)
}

//! Eligibility Resolver (§4.1): which courses a student may register for now.

use super::catalog::Catalog;
use super::models::{CourseId, CourseKind, Student, StudentStatus};

/// Terms at which a Residency is conventionally offered.
const RESIDENCY_TERMS: [u8; 2] = [6, 10];

/// Compute the ordered (insertion-stable) list of course ids `student` may
/// register for now.
#[must_use]
pub fn eligible_courses(catalog: &Catalog, student: &Student) -> Vec<CourseId> {
    if active_residency(catalog, student).is_some() {
        return Vec::new();
    }

    catalog
        .courses()
        .filter(|course| !student.has_approved(course.id))
        .filter(|course| catalog.has_group(course.id))
        .filter(|course| is_eligible(catalog, student, course.id))
        .map(|course| course.id)
        .collect()
}

/// The id of a residency course the student is currently mid-term in, if
/// any — derived from the scratch `simulated_enrollments` set populated by
/// the Trajectory Planner. Real (caller-owned) students never have this set
/// populated outside of planning.
fn active_residency(catalog: &Catalog, student: &Student) -> Option<CourseId> {
    student
        .simulated_enrollments
        .iter()
        .copied()
        .find(|&id| catalog.course(id).is_some_and(super::models::Course::is_residency))
}

fn is_eligible(catalog: &Catalog, student: &Student, course_id: CourseId) -> bool {
    let Some(course) = catalog.course(course_id) else {
        return false;
    };

    if course.is_residency() {
        return residency_gate(catalog, student, course_id);
    }

    match student.status {
        StudentStatus::Regular => {
            course.term == student.current_term
                && catalog.prereqs().satisfied(course_id, &student.approved)
        }
        StudentStatus::Irregular => {
            course.term <= student.current_term
                && catalog.prereqs().satisfied(course_id, &student.approved)
                && (course.kind != CourseKind::IntegratorProject
                    || catalog.project_deps().satisfied(course_id, &student.approved))
        }
    }
}

/// Residency gating per §4.1.
///
/// - Term-6 residency requires `current_term >= 6`, the term-5
///   `IntegratorProject` approved, and all of that project's direct
///   dependencies approved.
/// - Term-10 residency requires `current_term >= 10` OR the
///   "completion-path" alternative: all non-residency courses approved and
///   the term-9 `IntegratorProject` approved. This is the union decided in
///   `DESIGN.md` for the Term-10 Open Question.
fn residency_gate(catalog: &Catalog, student: &Student, residency_id: CourseId) -> bool {
    let Some(residency) = catalog.course(residency_id) else {
        return false;
    };

    if !RESIDENCY_TERMS.contains(&residency.term) {
        return false;
    }

    match residency.term {
        6 => {
            student.current_term >= 6
                && term_integrator_project_approved(catalog, student, 5)
        }
        10 => {
            let completion_path = all_non_residency_approved(catalog, student)
                && term_integrator_project_approved(catalog, student, 9);
            student.current_term >= 10 || completion_path
        }
        _ => false,
    }
}

fn term_integrator_project_approved(catalog: &Catalog, student: &Student, term: u8) -> bool {
    catalog
        .courses()
        .filter(|c| c.term == term && c.kind == CourseKind::IntegratorProject)
        .all(|project| {
            student.has_approved(project.id) && catalog.project_deps().satisfied(project.id, &student.approved)
        })
}

fn all_non_residency_approved(catalog: &Catalog, student: &Student) -> bool {
    catalog
        .courses()
        .filter(|c| !c.is_residency())
        .all(|c| student.has_approved(c.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{
        Course, CourseKind, Group, Meeting, Preferences, PrereqGraph, ProjectDepGraph,
        StudentStatus, TimeOfDay,
    };
    use std::collections::HashSet;

    fn prefs() -> Preferences {
        Preferences::new(TimeOfDay::Morning, HashSet::new())
    }

    fn student(term: u8, status: StudentStatus, approved: HashSet<CourseId>) -> Student {
        Student::new(1, "Test", term, status, 0.0, 18.0, approved, prefs())
    }

    fn group_for(course_id: CourseId, group_id: u32) -> Group {
        Group::new(group_id, course_id, "Smith", 30, 0, vec![Meeting::new(1, 9, 11, "A1")])
    }

    /// Builds a catalog with 7 term-1 courses (ids 1..7), 1 term-2 course (8)
    /// depending on course 1, a term-5 IntegratorProject (id 50) depending on
    /// courses 1..3, a term-6 Residency (id 60), a term-9 IntegratorProject
    /// (id 90), and a term-10 Residency (id 100).
    fn full_catalog() -> Catalog {
        let mut courses = Vec::new();
        let mut groups = Vec::new();
        for id in 1..=7u32 {
            courses.push(Course::new(id, format!("T1C{id}"), 1, 4.0, 60.0));
            groups.push(group_for(id, id + 1000));
        }
        courses.push(Course::new(8, "T2C1".into(), 2, 4.0, 60.0));
        groups.push(group_for(8, 1008));

        courses.push(Course::with_kind(
            50,
            "Capstone5".into(),
            5,
            6.0,
            90.0,
            CourseKind::IntegratorProject,
        ));
        groups.push(group_for(50, 1050));

        courses.push(Course::with_kind(
            60,
            "Residency6".into(),
            6,
            18.0,
            600.0,
            CourseKind::Residency,
        ));
        groups.push(Group::new(1060, 60, "N/A", 1, 0, vec![]));

        courses.push(Course::with_kind(
            90,
            "Capstone9".into(),
            9,
            6.0,
            90.0,
            CourseKind::IntegratorProject,
        ));
        groups.push(group_for(90, 1090));

        courses.push(Course::with_kind(
            100,
            "Residency10".into(),
            10,
            18.0,
            600.0,
            CourseKind::Residency,
        ));
        groups.push(Group::new(1100, 100, "N/A", 1, 0, vec![]));

        let mut prereqs = PrereqGraph::new();
        prereqs.add_prerequisite(8, 1);

        let mut project_deps = ProjectDepGraph::new();
        project_deps.add_dependency(50, 1);
        project_deps.add_dependency(50, 2);
        project_deps.add_dependency(50, 3);

        Catalog::new(courses, groups, prereqs, project_deps)
    }

    #[test]
    fn s1_regular_term1_all_seven_eligible() {
        let cat = full_catalog();
        let s = student(1, StudentStatus::Regular, HashSet::new());
        let mut elig = eligible_courses(&cat, &s);
        elig.sort_unstable();
        assert_eq!(elig, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn s2_regular_term6_residency_gated_in() {
        let cat = full_catalog();
        let approved: HashSet<CourseId> = (1..=7).chain([50]).collect();
        let s = student(6, StudentStatus::Regular, approved);
        let elig = eligible_courses(&cat, &s);
        assert_eq!(elig, vec![60]);
    }

    #[test]
    fn s3_regular_term6_without_capstone_no_residency() {
        let cat = full_catalog();
        let approved: HashSet<CourseId> = (1..=7).collect();
        let s = student(6, StudentStatus::Regular, approved);
        let elig = eligible_courses(&cat, &s);
        assert!(!elig.contains(&60));
    }

    #[test]
    fn s4_irregular_missing_prereq_blocks_dependent() {
        let cat = full_catalog();
        // Missing course 1, which course 8 (term 2) depends on.
        let approved: HashSet<CourseId> = (2..=7).collect();
        let s = student(4, StudentStatus::Irregular, approved);
        let elig = eligible_courses(&cat, &s);
        assert!(!elig.contains(&8));
        assert!(elig.contains(&1));
    }

    #[test]
    fn already_approved_excluded() {
        let cat = full_catalog();
        let mut approved = HashSet::new();
        approved.insert(1);
        let s = student(1, StudentStatus::Regular, approved);
        let elig = eligible_courses(&cat, &s);
        assert!(!elig.contains(&1));
    }

    #[test]
    fn residency_exclusivity_excludes_others() {
        let cat = full_catalog();
        let approved: HashSet<CourseId> = (1..=7).chain([50]).collect();
        let mut s = student(6, StudentStatus::Regular, approved);
        s.simulated_enrollments.insert(60);
        let elig = eligible_courses(&cat, &s);
        assert!(elig.is_empty());
    }

    #[test]
    fn term10_completion_path_without_reaching_term10() {
        let cat = full_catalog();
        let mut approved: HashSet<CourseId> = (1..=7).chain([8, 50, 60, 90]).collect();
        approved.remove(&100);
        let s = student(6, StudentStatus::Irregular, approved);
        let elig = eligible_courses(&cat, &s);
        assert!(elig.contains(&100));
    }

    /// A stale `simulated_enrollments` entry left over from a prior term's
    /// residency (not cleared between `plan_trajectory` loop iterations)
    /// permanently blocks the term-10 completion path — the condition
    /// `plan_trajectory` must avoid by clearing the set every iteration.
    #[test]
    fn stale_simulated_enrollment_blocks_completion_path_until_cleared() {
        let cat = full_catalog();
        let mut approved: HashSet<CourseId> = (1..=7).chain([8, 50, 60, 90]).collect();
        approved.remove(&100);
        let mut s = student(6, StudentStatus::Irregular, approved);

        s.simulated_enrollments.insert(60); // left over from the term-6 residency
        assert!(eligible_courses(&cat, &s).is_empty());

        s.simulated_enrollments.clear();
        assert!(eligible_courses(&cat, &s).contains(&100));
    }
}

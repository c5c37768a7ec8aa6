//! The immutable, shared curriculum catalog an [`Optimizer`](super::Optimizer)
//! is built from: Courses, Groups, and the prerequisite/project-dependency
//! graphs, plus a derived course -> groups index.

use super::models::{Course, CourseId, Group, GroupId, PrereqGraph, ProjectDepGraph};
use std::collections::HashMap;

/// Curriculum Graph + Section Catalog + dependency graphs, constructed once
/// and shared read-only by the eligibility resolver, optimizer, and planner.
///
/// Courses are kept in insertion order so that eligibility results remain
/// the "ordered (insertion-stable)" list §4.1 requires.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    course_index: HashMap<CourseId, usize>,
    groups: HashMap<GroupId, Group>,
    /// Derived index: course id -> list of group ids offering it.
    groups_by_course: HashMap<CourseId, Vec<GroupId>>,
    prereqs: PrereqGraph,
    project_deps: ProjectDepGraph,
}

impl Catalog {
    /// Build a catalog from its constituent parts. Validates the catalog's
    /// internal consistency (see [`crate::core::error::validate_catalog`]);
    /// panics on a malformed catalog.
    #[must_use]
    pub fn new(
        courses: Vec<Course>,
        groups: Vec<Group>,
        prereqs: PrereqGraph,
        project_deps: ProjectDepGraph,
    ) -> Self {
        crate::core::error::validate_catalog(&courses, &groups);

        let mut groups_by_course: HashMap<CourseId, Vec<GroupId>> = HashMap::new();
        for group in &groups {
            groups_by_course.entry(group.course_id).or_default().push(group.id);
        }
        let course_index = courses.iter().enumerate().map(|(i, c)| (c.id, i)).collect();

        Self {
            courses,
            course_index,
            groups: groups.into_iter().map(|g| (g.id, g)).collect(),
            groups_by_course,
            prereqs,
            project_deps,
        }
    }

    /// Look up a course by id.
    #[must_use]
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.course_index.get(&id).map(|&i| &self.courses[i])
    }

    /// Look up a group by id.
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(&id)
    }

    /// All courses, in catalog (insertion) order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    /// Group ids offering `course_id`, or an empty slice if none.
    #[must_use]
    pub fn groups_for_course(&self, course_id: CourseId) -> &[GroupId] {
        self.groups_by_course.get(&course_id).map_or(&[], Vec::as_slice)
    }

    /// All groups, in no particular order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    /// Whether at least one group exists for `course_id`.
    #[must_use]
    pub fn has_group(&self, course_id: CourseId) -> bool {
        !self.groups_for_course(course_id).is_empty()
    }

    /// The prerequisite graph.
    #[must_use]
    pub const fn prereqs(&self) -> &PrereqGraph {
        &self.prereqs
    }

    /// The project-dependency graph.
    #[must_use]
    pub const fn project_deps(&self) -> &ProjectDepGraph {
        &self.project_deps
    }
}

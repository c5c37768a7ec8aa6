//! Prerequisite and project-dependency graphs over [`CourseId`]s.

use super::CourseId;
use std::collections::HashMap;

/// Adjacency map from a course to its set of prerequisite courses.
///
/// Mirrors the adjacency-list shape of a curriculum DAG: two association
/// lists (forward and reverse) keyed by course id, finite and acyclic by
/// construction.
#[derive(Debug, Clone, Default)]
pub struct PrereqGraph {
    /// Maps course id -> list of prerequisite course ids.
    prerequisites: HashMap<CourseId, Vec<CourseId>>,
    /// Maps course id -> list of courses that depend on it (reverse graph).
    dependents: HashMap<CourseId, Vec<CourseId>>,
}

impl PrereqGraph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prerequisites: HashMap::new(),
            dependents: HashMap::new(),
        }
    }

    /// Register a course with no prerequisites (no-op if already present).
    pub fn add_course(&mut self, course_id: CourseId) {
        self.prerequisites.entry(course_id).or_default();
    }

    /// Record that `course_id` requires `prerequisite_id`.
    pub fn add_prerequisite(&mut self, course_id: CourseId, prerequisite_id: CourseId) {
        let deps = self.prerequisites.entry(course_id).or_default();
        if !deps.contains(&prerequisite_id) {
            deps.push(prerequisite_id);
        }
        let rev = self.dependents.entry(prerequisite_id).or_default();
        if !rev.contains(&course_id) {
            rev.push(course_id);
        }
    }

    /// Prerequisites of `course_id`, or an empty slice if none are recorded.
    #[must_use]
    pub fn prerequisites_of(&self, course_id: CourseId) -> &[CourseId] {
        self.prerequisites
            .get(&course_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Courses that directly depend on `course_id` (out-degree source).
    #[must_use]
    pub fn dependents_of(&self, course_id: CourseId) -> &[CourseId] {
        self.dependents.get(&course_id).map_or(&[], Vec::as_slice)
    }

    /// Number of courses that list `course_id` as a direct prerequisite.
    #[must_use]
    pub fn out_degree(&self, course_id: CourseId) -> usize {
        self.dependents_of(course_id).len()
    }

    /// Whether every id in `prerequisites_of(course_id)` is present in `approved`.
    #[must_use]
    pub fn satisfied(&self, course_id: CourseId, approved: &std::collections::HashSet<CourseId>) -> bool {
        self.prerequisites_of(course_id)
            .iter()
            .all(|p| approved.contains(p))
    }
}

/// Mapping from an `IntegratorProject`/`Residency` course to the set of
/// thematic dependency courses it requires beyond standard prerequisites.
#[derive(Debug, Clone, Default)]
pub struct ProjectDepGraph {
    dependencies: HashMap<CourseId, Vec<CourseId>>,
}

impl ProjectDepGraph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dependencies: HashMap::new(),
        }
    }

    /// Record that `project_id` depends on `dependency_id`.
    pub fn add_dependency(&mut self, project_id: CourseId, dependency_id: CourseId) {
        let deps = self.dependencies.entry(project_id).or_default();
        if !deps.contains(&dependency_id) {
            deps.push(dependency_id);
        }
    }

    /// Dependencies of `project_id`, or an empty slice if none are recorded.
    #[must_use]
    pub fn dependencies_of(&self, project_id: CourseId) -> &[CourseId] {
        self.dependencies
            .get(&project_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Whether every dependency of `project_id` is present in `approved`.
    #[must_use]
    pub fn satisfied(&self, project_id: CourseId, approved: &std::collections::HashSet<CourseId>) -> bool {
        self.dependencies_of(project_id)
            .iter()
            .all(|d| approved.contains(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_prereq_graph_basic() {
        let mut g = PrereqGraph::new();
        g.add_prerequisite(2, 1);
        g.add_prerequisite(3, 2);

        assert_eq!(g.prerequisites_of(2), &[1]);
        assert_eq!(g.dependents_of(1), &[2]);
        assert_eq!(g.out_degree(1), 1);
    }

    #[test]
    fn test_prereq_no_duplicates() {
        let mut g = PrereqGraph::new();
        g.add_prerequisite(2, 1);
        g.add_prerequisite(2, 1);
        assert_eq!(g.prerequisites_of(2).len(), 1);
    }

    #[test]
    fn test_satisfied() {
        let mut g = PrereqGraph::new();
        g.add_prerequisite(3, 1);
        g.add_prerequisite(3, 2);

        let mut approved: HashSet<CourseId> = HashSet::new();
        assert!(!g.satisfied(3, &approved));
        approved.insert(1);
        assert!(!g.satisfied(3, &approved));
        approved.insert(2);
        assert!(g.satisfied(3, &approved));
    }

    #[test]
    fn test_project_dep_graph() {
        let mut g = ProjectDepGraph::new();
        g.add_dependency(100, 10);
        g.add_dependency(100, 11);

        let mut approved: HashSet<CourseId> = HashSet::new();
        approved.insert(10);
        assert!(!g.satisfied(100, &approved));
        approved.insert(11);
        assert!(g.satisfied(100, &approved));
    }
}

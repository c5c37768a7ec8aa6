//! The public facade over the planner core (§6): four operations on an
//! `Optimizer` value built from a fixed `(Courses, Groups, PrereqGraph,
//! ProjectDepGraph)` catalog.

use super::catalog::Catalog;
use super::eligibility;
use super::ga;
use super::materializer;
use super::models::{Course, CourseId, Group, GroupId, PrereqGraph, ProjectDepGraph, Schedule, Student, WeeklyGrid};
use super::trajectory::{self, TrajectoryPlan};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Owns the immutable curriculum catalog and the single seeded PRNG that
/// every randomized operation draws from, per §5 "Determinism".
pub struct Optimizer {
    catalog: Catalog,
    rng: SmallRng,
}

impl Optimizer {
    /// Build an optimizer over a catalog, seeded from OS entropy.
    ///
    /// # Panics
    /// Panics if the catalog is internally inconsistent (see
    /// [`crate::core::error::validate_catalog`]).
    #[must_use]
    pub fn new(
        courses: Vec<Course>,
        groups: Vec<Group>,
        prereqs: PrereqGraph,
        project_deps: ProjectDepGraph,
    ) -> Self {
        Self {
            catalog: Catalog::new(courses, groups, prereqs, project_deps),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Build an optimizer over a catalog with an explicit PRNG seed, for
    /// reproducible runs (§5 "Determinism", §8 Testable Properties).
    ///
    /// # Panics
    /// Panics if the catalog is internally inconsistent.
    #[must_use]
    pub fn with_seed(
        courses: Vec<Course>,
        groups: Vec<Group>,
        prereqs: PrereqGraph,
        project_deps: ProjectDepGraph,
        seed: u64,
    ) -> Self {
        Self {
            catalog: Catalog::new(courses, groups, prereqs, project_deps),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// The underlying catalog, for callers that need direct read access
    /// (e.g. to look up a `Course` or `Group` by id).
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// §4.1: the ordered list of course ids `student` may register for now.
    #[must_use]
    pub fn eligible_courses(&self, student: &Student) -> Vec<CourseId> {
        eligibility::eligible_courses(&self.catalog, student)
    }

    /// §4.2: project a chosen set of group ids onto a weekly grid.
    #[must_use]
    pub fn materialize_weekly(&self, group_ids: &[GroupId]) -> WeeklyGrid {
        materializer::materialize(&self.catalog, group_ids)
    }

    /// §4.3: run the single-term genetic-algorithm optimizer and return the
    /// best [`Schedule`] found. An empty schedule carries a [`Warning`](
    /// super::error::Warning) explaining why (§7 `EmptyEligibility`,
    /// `NoFeasibleIndividual`).
    #[must_use]
    pub fn optimize_term(
        &mut self,
        student: &Student,
        population_size: usize,
        generations: usize,
        crossover_rate: f32,
        mutation_rate: f32,
        restrict_to_groups: Option<&[GroupId]>,
    ) -> Schedule {
        let eligible = self.eligible_courses(student);
        ga::run(
            &self.catalog,
            student,
            &eligible,
            population_size.max(1),
            generations,
            crossover_rate.clamp(0.0, 1.0),
            mutation_rate.clamp(0.0, 1.0),
            restrict_to_groups,
            &mut self.rng,
        )
    }

    /// §4.4: forward-simulate `student` term by term until graduation.
    #[must_use]
    pub fn plan_trajectory(&mut self, student: &Student) -> TrajectoryPlan {
        trajectory::plan_trajectory(&self.catalog, student, &mut self.rng)
    }
}

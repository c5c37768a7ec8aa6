//! Single-Term Optimizer internals (§4.3): the genetic algorithm that turns
//! an eligible-course list into a concrete list of Group ids.
//!
//! This module is deliberately free of any public-facing ergonomics — it is
//! driven by [`crate::core::optimizer::Optimizer::optimize_term`], which owns
//! the seeded PRNG and the catalog reference. Kept as a plain population/
//! fitness/crossover/mutate loop over `rand` directly, no generic GA
//! framework trait.

use super::catalog::Catalog;
use super::error::Warning;
use super::models::{Course, CourseId, CourseKind, Group, GroupId, Schedule, Student};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// A candidate schedule: a variable-length list of Group ids. No Course
/// appears twice; no two Groups' Meetings overlap (maintained by
/// construction, crossover repair, and mutation).
pub type Individual = Vec<GroupId>;

/// Run the genetic algorithm and return the best schedule found, or an empty
/// [`Schedule`] carrying a [`Warning`] if no constraint-satisfying individual
/// could be constructed (§7).
#[allow(clippy::too_many_arguments)]
pub fn run(
    catalog: &Catalog,
    student: &Student,
    eligible: &[CourseId],
    population_size: usize,
    generations: usize,
    crossover_rate: f32,
    mutation_rate: f32,
    restrict_to_groups: Option<&[GroupId]>,
    rng: &mut SmallRng,
) -> Schedule {
    if eligible.is_empty() {
        return Schedule::empty_with_warning(Warning::EmptyEligibility);
    }

    if let Some(short_circuit) = residency_short_circuit(catalog, eligible) {
        return Schedule::new(short_circuit);
    }

    let groups_by_course = build_groups_by_course(catalog, eligible, restrict_to_groups);
    if groups_by_course.values().all(Vec::is_empty) {
        return Schedule::empty_with_warning(Warning::NoFeasibleIndividual);
    }

    let population_size = population_size.max(1);
    let mut population = init_population(catalog, &groups_by_course, population_size, rng);
    if population.is_empty() {
        return Schedule::empty_with_warning(Warning::NoFeasibleIndividual);
    }

    let mut best = population
        .iter()
        .max_by(|a, b| {
            fitness(catalog, student, a)
                .partial_cmp(&fitness(catalog, student, b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .cloned()
        .unwrap_or_default();
    let mut best_fitness = fitness(catalog, student, &best);

    for generation in 0..generations {
        let fitnesses: Vec<f32> = population
            .iter()
            .map(|ind| fitness(catalog, student, ind))
            .collect();

        if generation == 0 && fitnesses.iter().all(|&f| f <= 0.0) {
            break;
        }

        for (ind, &f) in population.iter().zip(&fitnesses) {
            if f > best_fitness {
                best_fitness = f;
                best.clone_from(ind);
            }
        }

        let mut next_generation = Vec::with_capacity(population.len());
        next_generation.push(best.clone());

        loop {
            if next_generation.len() >= population.len() {
                break;
            }
            let Some(parent1) = tournament_select(&population, &fitnesses, rng) else {
                break;
            };
            let Some(parent2) = tournament_select(&population, &fitnesses, rng) else {
                break;
            };

            let (mut child1, mut child2) = if rng.gen_bool(f64::from(crossover_rate.clamp(0.0, 1.0))) {
                crossover(catalog, parent1, parent2, rng)
            } else {
                (parent1.clone(), parent2.clone())
            };

            if rng.gen_bool(f64::from(mutation_rate.clamp(0.0, 1.0))) {
                mutate(&mut child1, catalog, eligible, &groups_by_course, rng);
            }
            next_generation.push(child1);

            if next_generation.len() < population.len() {
                if rng.gen_bool(f64::from(mutation_rate.clamp(0.0, 1.0))) {
                    mutate(&mut child2, catalog, eligible, &groups_by_course, rng);
                }
                next_generation.push(child2);
            }
        }

        if next_generation.len() <= 1 {
            break;
        }
        population = next_generation;
    }

    let final_best = population
        .iter()
        .max_by(|a, b| {
            fitness(catalog, student, a)
                .partial_cmp(&fitness(catalog, student, b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .cloned()
        .unwrap_or_default();

    let chosen = if fitness(catalog, student, &final_best) >= best_fitness {
        final_best
    } else {
        best
    };
    Schedule::new(chosen)
}

/// §4.3 "Residency short-circuit". Returns `Some` with the chosen group (or
/// an empty vec, meaning "no capacity, fall through") when any eligible
/// course is a Residency. Returns `None` when no eligible course is one.
fn residency_short_circuit(catalog: &Catalog, eligible: &[CourseId]) -> Option<Individual> {
    let residency_id = eligible
        .iter()
        .copied()
        .find(|&id| catalog.course(id).is_some_and(Course::is_residency))?;

    let best_group = catalog
        .groups_for_course(residency_id)
        .iter()
        .filter_map(|&gid| catalog.group(gid))
        .filter(|g| g.has_capacity())
        .min_by_key(|g| g.current_enrollment)
        .map(|g| g.id);

    match best_group {
        Some(gid) => Some(vec![gid]),
        None => None, // CapacityExhausted: fall through to the GA.
    }
}

fn build_groups_by_course(
    catalog: &Catalog,
    eligible: &[CourseId],
    restrict_to_groups: Option<&[GroupId]>,
) -> HashMap<CourseId, Vec<GroupId>> {
    let eligible_set: HashSet<_> = eligible.iter().copied().collect();
    let mut map = HashMap::new();

    match restrict_to_groups {
        Some(ids) => {
            for &gid in ids {
                let Some(group) = catalog.group(gid) else {
                    continue; // unknown ids are skipped silently, per §6.
                };
                if eligible_set.contains(&group.course_id) {
                    map.entry(group.course_id).or_insert_with(Vec::new).push(gid);
                }
            }
        }
        None => {
            for &course_id in eligible {
                let groups = catalog.groups_for_course(course_id);
                if !groups.is_empty() {
                    map.insert(course_id, groups.to_vec());
                }
            }
        }
    }
    map
}

/// §4.3 "Initialization": sample between `min(2, |courses|)` and
/// `min(8, |courses|)` courses per individual, greedily picking a
/// non-conflicting, capacity-having Group for each. Retries up to
/// `5 * population_size` times; fills any shortfall by duplicating existing
/// individuals.
fn init_population(
    catalog: &Catalog,
    groups_by_course: &HashMap<CourseId, Vec<GroupId>>,
    population_size: usize,
    rng: &mut SmallRng,
) -> Vec<Individual> {
    let courses: Vec<_> = groups_by_course
        .iter()
        .filter(|(_, groups)| !groups.is_empty())
        .map(|(&c, _)| c)
        .collect();
    if courses.is_empty() {
        return Vec::new();
    }

    let min_sample = courses.len().min(2);
    let max_sample = courses.len().min(8);

    let mut population = Vec::new();
    let max_attempts = 5 * population_size;
    let mut attempts = 0;

    while population.len() < population_size && attempts < max_attempts {
        attempts += 1;
        if let Some(individual) = build_one_individual(
            catalog,
            groups_by_course,
            &courses,
            min_sample,
            max_sample,
            rng,
        ) {
            population.push(individual);
        }
    }

    if population.is_empty() {
        return Vec::new();
    }

    while population.len() < population_size {
        let clone_of = population.choose(rng).cloned().unwrap_or_default();
        population.push(clone_of);
    }

    population
}

fn build_one_individual(
    catalog: &Catalog,
    groups_by_course: &HashMap<CourseId, Vec<GroupId>>,
    courses: &[CourseId],
    min_sample: usize,
    max_sample: usize,
    rng: &mut SmallRng,
) -> Option<Individual> {
    let sample_size = if min_sample >= max_sample {
        max_sample
    } else {
        rng.gen_range(min_sample..=max_sample)
    };
    let mut sampled: Vec<_> = courses.to_vec();
    sampled.shuffle(rng);
    sampled.truncate(sample_size);

    let mut chosen_groups: Vec<&Group> = Vec::new();
    let mut individual = Individual::new();

    for course_id in sampled {
        let Some(candidates) = groups_by_course.get(&course_id) else {
            continue;
        };
        let mut shuffled: Vec<_> = candidates.clone();
        shuffled.shuffle(rng);

        let pick = shuffled.into_iter().find_map(|gid| {
            let group = catalog.group(gid)?;
            if !group.has_capacity() {
                return None;
            }
            if chosen_groups.iter().any(|g| g.conflicts_with(group)) {
                return None;
            }
            Some(group)
        });

        if let Some(group) = pick {
            individual.push(group.id);
            chosen_groups.push(group);
        }
    }

    if individual.is_empty() {
        None
    } else {
        Some(individual)
    }
}

/// §4.3 "Selection": tournament of size `min(3, |population|)`, sampled
/// without replacement; winner is the highest-fitness competitor.
fn tournament_select<'a>(
    population: &'a [Individual],
    fitnesses: &[f32],
    rng: &mut SmallRng,
) -> Option<&'a Individual> {
    if population.is_empty() {
        return None;
    }
    let tournament_size = population.len().min(3);
    let mut indices: Vec<usize> = (0..population.len()).collect();
    indices.shuffle(rng);
    indices
        .into_iter()
        .take(tournament_size)
        .max_by(|&a, &b| {
            fitnesses[a]
                .partial_cmp(&fitnesses[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|i| &population[i])
}

/// §4.3 "Crossover": single-point at a random position in
/// `[1, min(|p1|,|p2|) - 1]`. Parents of length <= 1 pass through unchanged.
/// Children are repaired to preserve the no-duplicate/no-conflict
/// representation invariant (§4.3 "Representation").
fn crossover(
    catalog: &Catalog,
    parent1: &Individual,
    parent2: &Individual,
    rng: &mut SmallRng,
) -> (Individual, Individual) {
    if parent1.len() <= 1 || parent2.len() <= 1 {
        return (parent1.clone(), parent2.clone());
    }
    let bound = parent1.len().min(parent2.len());
    if bound < 2 {
        return (parent1.clone(), parent2.clone());
    }
    let point = rng.gen_range(1..bound);

    let mut child1: Individual = parent1[..point].to_vec();
    child1.extend_from_slice(&parent2[point..]);
    let mut child2: Individual = parent2[..point].to_vec();
    child2.extend_from_slice(&parent1[point..]);

    (repair(catalog, &child1), repair(catalog, &child2))
}

/// Repairs a crossover child in place so that it contains no duplicate
/// course and no pairwise meeting conflict — group ids are kept in order,
/// later entries that would violate the invariant are dropped.
fn repair(catalog: &Catalog, individual: &Individual) -> Individual {
    let mut seen_courses = HashSet::new();
    let mut accepted: Vec<&Group> = Vec::new();
    let mut result = Individual::new();

    for &gid in individual {
        let Some(group) = catalog.group(gid) else {
            continue;
        };
        if !seen_courses.insert(group.course_id) {
            continue;
        }
        if accepted.iter().any(|g| g.conflicts_with(group)) {
            continue;
        }
        accepted.push(group);
        result.push(gid);
    }
    result
}

/// §4.3 "Mutation": with probability `mutation_rate` (applied by the caller)
/// pick a position and try (in order) to swap to another Group of the same
/// Course, then to replace with a Group of a currently-unscheduled eligible
/// Course; otherwise leave the individual unchanged.
fn mutate(
    individual: &mut Individual,
    catalog: &Catalog,
    eligible: &[CourseId],
    groups_by_course: &HashMap<CourseId, Vec<GroupId>>,
    rng: &mut SmallRng,
) {
    *individual = repair(catalog, individual);
    if individual.is_empty() {
        return;
    }

    let position = rng.gen_range(0..individual.len());
    let Some(current_group) = catalog.group(individual[position]) else {
        return;
    };
    let current_course = current_group.course_id;

    let others: Vec<&Group> = individual
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != position)
        .filter_map(|(_, &gid)| catalog.group(gid))
        .collect();

    // Try swapping to another Group of the same Course.
    if let Some(candidates) = groups_by_course.get(&current_course) {
        let mut shuffled = candidates.clone();
        shuffled.shuffle(rng);
        let swap_target = shuffled.into_iter().find(|&gid| {
            gid != individual[position]
                && catalog
                    .group(gid)
                    .is_some_and(|g| g.has_capacity() && !others.iter().any(|o| o.conflicts_with(g)))
        });
        if let Some(gid) = swap_target {
            individual[position] = gid;
            return;
        }
    }

    // Try replacing with a Group of a currently-unscheduled eligible Course.
    let scheduled_courses: HashSet<_> = individual
        .iter()
        .filter_map(|&gid| catalog.group(gid))
        .map(|g| g.course_id)
        .collect();

    let mut candidate_courses: Vec<_> = eligible
        .iter()
        .copied()
        .filter(|c| !scheduled_courses.contains(c))
        .collect();
    candidate_courses.shuffle(rng);

    for course_id in candidate_courses {
        let Some(candidates) = groups_by_course.get(&course_id) else {
            continue;
        };
        let mut shuffled = candidates.clone();
        shuffled.shuffle(rng);
        if let Some(gid) = shuffled.into_iter().find(|&gid| {
            catalog
                .group(gid)
                .is_some_and(|g| g.has_capacity() && !others.iter().any(|o| o.conflicts_with(g)))
        }) {
            individual[position] = gid;
            return;
        }
    }
    // Otherwise leave unchanged.
}

/// §4.3 "Fitness": maps an individual to a score in `[0, 1]`. Hard
/// constraint violations (credit cap, course-count cap, course-count /
/// duplication invariants, meeting overlap, mixed-residency) return `0.0`.
#[must_use]
pub fn fitness(catalog: &Catalog, student: &Student, individual: &Individual) -> f32 {
    if individual.is_empty() {
        return 0.0;
    }

    let groups: Vec<&Group> = individual.iter().filter_map(|&gid| catalog.group(gid)).collect();
    if groups.len() != individual.len() {
        return 0.0;
    }
    let courses: Vec<&Course> = groups.iter().filter_map(|g| catalog.course(g.course_id)).collect();
    if courses.len() != groups.len() {
        return 0.0;
    }

    let residency_count = courses.iter().filter(|c| c.is_residency()).count();
    if residency_count > 1 || (residency_count == 1 && courses.len() > 1) {
        return 0.0;
    }
    if residency_count == 1 {
        return 1.0;
    }

    let mut seen_courses = HashSet::new();
    for course in &courses {
        if !seen_courses.insert(course.id) {
            return 0.0;
        }
    }
    for i in 0..groups.len() {
        for j in (i + 1)..groups.len() {
            if groups[i].conflicts_with(groups[j]) {
                return 0.0;
            }
        }
    }

    let total_credits: f32 = courses.iter().map(|c| c.credits).sum();
    if total_credits > student.credit_cap {
        return 0.0;
    }

    let max_courses = if student.is_regular() { 7 } else { 5 };
    if courses.len() > max_courses {
        return 0.0;
    }

    let n = courses.len() as f32;
    let count_fit = if student.is_regular() {
        if courses.len() == 7 {
            1.0
        } else {
            1.0 - 0.1 * (7.0 - n)
        }
    } else {
        n / 5.0
    };

    let hours_per_day = hours_per_day(&groups);
    let day_balance = 1.0 / (1.0 + stdev(&hours_per_day));
    let credit_utilization = total_credits / student.credit_cap;

    let backlog_priority: f32 = if student.is_regular() {
        0.0
    } else {
        courses
            .iter()
            .map(|c| (f32::from(student.current_term) - f32::from(c.term)).max(0.0))
            .sum()
    };

    let (consecutive_hours, isolated_hours) = consecutive_runs(&groups);
    let consecutive_bonus = consecutive_hours / (consecutive_hours + isolated_hours + 1.0);

    let mut kind_seen = [false; 3];
    for course in &courses {
        kind_seen[kind_index(course.kind)] = true;
    }
    let distinct_kinds = kind_seen.iter().filter(|&&seen| seen).count() as f32;
    let type_diversity = (distinct_kinds / 3.0).min(1.0);

    let days_over_8 = hours_per_day.iter().filter(|&&h| h > 8.0).count() as f32;
    let days_light = hours_per_day.iter().filter(|&&h| h > 0.0 && h <= 2.0).count() as f32;
    let distribution_penalty = 0.05 * (days_over_8 + days_light);

    let raw = if student.is_regular() {
        0.40 * count_fit + 0.20 * day_balance + 0.15 * credit_utilization + 0.15 * consecutive_bonus
            + 0.10 * type_diversity
            - distribution_penalty
    } else {
        0.30 * count_fit + 0.15 * day_balance + 0.30 * backlog_priority + 0.15 * consecutive_bonus
            + 0.10 * type_diversity
            - distribution_penalty
    };

    raw.clamp(0.0, 1.0)
}

const fn kind_index(kind: CourseKind) -> usize {
    match kind {
        CourseKind::Regular => 0,
        CourseKind::IntegratorProject => 1,
        CourseKind::Residency => 2,
    }
}

/// Total contact hours per weekday (index 0 = Monday .. index 4 = Friday)
/// across all of `groups`' Meetings.
fn hours_per_day(groups: &[&Group]) -> [f32; 5] {
    let mut hours = [0.0_f32; 5];
    for group in groups {
        for meeting in &group.meetings {
            if (1..=5).contains(&meeting.day) {
                hours[usize::from(meeting.day) - 1] += f32::from(meeting.duration());
            }
        }
    }
    hours
}

fn stdev(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f32>() / values.len() as f32;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / values.len() as f32;
    variance.sqrt()
}

/// Counts total hours that fall in runs of length >= 2 ("consecutive") vs.
/// runs of length 1 ("isolated"), per weekday, across all Meetings.
fn consecutive_runs(groups: &[&Group]) -> (f32, f32) {
    let mut consecutive = 0.0_f32;
    let mut isolated = 0.0_f32;

    for day in 1..=5u8 {
        let mut occupied_hours: Vec<u8> = Vec::new();
        for group in groups {
            for meeting in &group.meetings {
                if meeting.day == day {
                    for hour in meeting.start_hour..meeting.end_hour {
                        occupied_hours.push(hour);
                    }
                }
            }
        }
        occupied_hours.sort_unstable();
        occupied_hours.dedup();

        let mut run_len = 0u32;
        let mut prev: Option<u8> = None;
        for hour in &occupied_hours {
            if prev == Some(hour - 1) {
                run_len += 1;
            } else {
                flush_run(run_len, &mut consecutive, &mut isolated);
                run_len = 1;
            }
            prev = Some(*hour);
        }
        flush_run(run_len, &mut consecutive, &mut isolated);
    }

    (consecutive, isolated)
}

fn flush_run(run_len: u32, consecutive: &mut f32, isolated: &mut f32) {
    if run_len >= 2 {
        *consecutive += run_len as f32;
    } else if run_len == 1 {
        *isolated += 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{
        Course, CourseKind, Group, Meeting, Preferences, PrereqGraph, ProjectDepGraph,
        StudentStatus, TimeOfDay,
    };
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn prefs() -> Preferences {
        Preferences::new(TimeOfDay::Morning, HashSet::new())
    }

    fn student(status: StudentStatus) -> Student {
        Student::new(1, "Test", 1, status, 0.0, 25.0, HashSet::new(), prefs())
    }

    fn seven_course_catalog() -> Catalog {
        let mut courses = Vec::new();
        let mut groups = Vec::new();
        for i in 0..7u32 {
            let id = i + 1;
            courses.push(Course::new(id, format!("C{id}"), 1, 4.0, 60.0));
            let day = (i % 5) as u8 + 1;
            let start = 8 + (i / 5) as u8 * 2;
            groups.push(Group::new(
                100 + id,
                id,
                "Smith",
                30,
                0,
                vec![Meeting::new(day, start, start + 2, "A1")],
            ));
        }
        Catalog::new(courses, groups, PrereqGraph::new(), ProjectDepGraph::new())
    }

    #[test]
    fn s1_optimizer_selects_seven_non_conflicting_groups() {
        let catalog = seven_course_catalog();
        let s = student(StudentStatus::Regular);
        let eligible: Vec<_> = catalog.courses().map(|c| c.id).collect();
        let mut rng = SmallRng::seed_from_u64(7);
        let result = run(&catalog, &s, &eligible, 100, 30, 0.8, 0.2, None, &mut rng);
        assert_eq!(result.len(), 7);
        assert!((fitness(&catalog, &s, &result.group_ids) - 1.0).abs() < 1e-4);
        assert!(result.warning.is_none());
    }

    #[test]
    fn residency_short_circuit_returns_single_group() {
        let courses = vec![Course::with_kind(
            1,
            "Residency".into(),
            6,
            18.0,
            600.0,
            CourseKind::Residency,
        )];
        let groups = vec![
            Group::new(10, 1, "N/A", 10, 9, vec![]),
            Group::new(11, 1, "N/A", 10, 2, vec![]),
        ];
        let catalog = Catalog::new(courses, groups, PrereqGraph::new(), ProjectDepGraph::new());
        let s = student(StudentStatus::Regular);
        let mut rng = SmallRng::seed_from_u64(1);
        let result = run(&catalog, &s, &[1], 10, 5, 0.8, 0.2, None, &mut rng);
        assert_eq!(result.group_ids, vec![11]); // least-enrolled with capacity
    }

    #[test]
    fn residency_capacity_exhausted_falls_through() {
        let courses = vec![
            Course::with_kind(1, "Residency".into(), 6, 18.0, 600.0, CourseKind::Residency),
            Course::new(2, "Backup".into(), 6, 4.0, 60.0),
        ];
        let groups = vec![
            Group::new(10, 1, "N/A", 10, 20, vec![]), // over capacity
            Group::new(20, 2, "Lee", 30, 0, vec![Meeting::new(1, 9, 11, "A1")]),
        ];
        let catalog = Catalog::new(courses, groups, PrereqGraph::new(), ProjectDepGraph::new());
        let s = student(StudentStatus::Regular);
        let mut rng = SmallRng::seed_from_u64(1);
        let result = run(&catalog, &s, &[1, 2], 10, 5, 0.8, 0.2, None, &mut rng);
        // Residency has no capacity; GA must not select it (hard-invalidated
        // whenever mixed with another course, and alone it has no capacity).
        assert!(!result.group_ids.contains(&10));
    }

    #[test]
    fn fitness_returns_zero_on_overlap() {
        let courses = vec![Course::new(1, "A".into(), 1, 4.0, 60.0), Course::new(2, "B".into(), 1, 4.0, 60.0)];
        let groups = vec![
            Group::new(10, 1, "Smith", 30, 0, vec![Meeting::new(1, 9, 11, "A1")]),
            Group::new(20, 2, "Lee", 30, 0, vec![Meeting::new(1, 10, 12, "B1")]),
        ];
        let catalog = Catalog::new(courses, groups, PrereqGraph::new(), ProjectDepGraph::new());
        let s = student(StudentStatus::Regular);
        assert_eq!(fitness(&catalog, &s, &vec![10, 20]), 0.0);
    }

    #[test]
    fn fitness_returns_zero_over_credit_cap() {
        let courses = vec![Course::new(1, "A".into(), 1, 30.0, 60.0)];
        let groups = vec![Group::new(10, 1, "Smith", 30, 0, vec![Meeting::new(1, 9, 11, "A1")])];
        let catalog = Catalog::new(courses, groups, PrereqGraph::new(), ProjectDepGraph::new());
        let mut s = student(StudentStatus::Regular);
        s.credit_cap = 18.0;
        assert_eq!(fitness(&catalog, &s, &vec![10]), 0.0);
    }

    #[test]
    fn fitness_in_bounds() {
        let catalog = seven_course_catalog();
        let s = student(StudentStatus::Irregular);
        assert!(fitness(&catalog, &s, &vec![101, 102]) <= 1.0);
        assert!(fitness(&catalog, &s, &vec![101, 102]) >= 0.0);
    }

    #[test]
    fn empty_eligibility_yields_empty_schedule_with_warning() {
        let catalog = seven_course_catalog();
        let s = student(StudentStatus::Regular);
        let mut rng = SmallRng::seed_from_u64(1);
        let result = run(&catalog, &s, &[], 10, 5, 0.8, 0.2, None, &mut rng);
        assert!(result.is_empty());
        assert_eq!(result.warning, Some(Warning::EmptyEligibility));
    }

    #[test]
    fn no_groups_for_any_eligible_course_yields_no_feasible_individual() {
        let courses = vec![Course::new(1, "A".into(), 1, 4.0, 60.0)];
        let catalog = Catalog::new(courses, Vec::new(), PrereqGraph::new(), ProjectDepGraph::new());
        let s = student(StudentStatus::Regular);
        let mut rng = SmallRng::seed_from_u64(1);
        let result = run(&catalog, &s, &[1], 10, 5, 0.8, 0.2, None, &mut rng);
        assert!(result.is_empty());
        assert_eq!(result.warning, Some(Warning::NoFeasibleIndividual));
    }

    #[test]
    fn restrict_to_groups_is_honored() {
        let catalog = seven_course_catalog();
        let s = student(StudentStatus::Regular);
        let eligible: Vec<_> = catalog.courses().map(|c| c.id).collect();
        let restrict = [101, 102, 9999]; // 9999 unknown, skipped silently
        let mut rng = SmallRng::seed_from_u64(3);
        let result = run(&catalog, &s, &eligible, 20, 10, 0.8, 0.2, Some(&restrict), &mut rng);
        assert!(result.group_ids.iter().all(|g| [101, 102].contains(g)));
    }
}

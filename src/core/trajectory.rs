//! Trajectory Planner and Term Simulator (§4.4, §4.5): forward-simulates a
//! virtual student term by term until graduation, synthesizing plausible
//! (not catalog-backed) weekly schedules along the way.

use super::catalog::Catalog;
use super::eligibility;
use super::error::Warning;
use super::models::{Course, CourseId, CourseKind, GroupId, Occupant, Student, WeeklyGrid};
use rand::rngs::SmallRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum number of academic terms a trajectory may span, per §4.4.
const MAX_TERMS: u8 = 15;
/// Safety cap on planner loop iterations, independent of `MAX_TERMS`,
/// guarding against a stalled plan that never advances `term` past the cap
/// (e.g. `student.current_term` already exceeds it).
const SAFETY_ITERATION_CAP: u32 = 20;

/// A single course placed into a synthesized term schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledCourse {
    /// The scheduled course's id.
    pub course_id: CourseId,
    /// Display name.
    pub course_name: String,
    /// `0` for Term-Simulator output: synthesized sessions are not backed by
    /// a real catalog Group.
    pub group_id: GroupId,
    /// Placeholder instructor for synthesized sessions.
    pub instructor: String,
    /// Credit hours.
    pub credits: f32,
    /// The course's home term in the curriculum.
    pub course_term: u8,
    /// The course's kind.
    pub kind: CourseKind,
    /// Synthesized weekly meetings: (day, start hour, end hour, room).
    pub meetings: Vec<(u8, u8, u8, String)>,
}

/// A single term's synthesized plan, as produced by the Term Simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermPlan {
    /// The term number this plan covers.
    pub term: u8,
    /// Courses scheduled this term.
    pub courses: Vec<ScheduledCourse>,
    /// Sum of `courses[i].credits`.
    pub total_credits: f32,
    /// `courses.len()`.
    pub course_count: usize,
    /// The synthesized weekly grid for this term.
    pub weekly_grid: WeeklyGrid,
    /// Contact hours per weekday (1..5), as scheduled this term.
    pub load_per_day: BTreeMap<u8, f32>,
    /// Whether this term is a full-time Residency term.
    pub full_time: bool,
    /// A non-fatal warning, if this term could not be fully scheduled.
    pub warning: Option<Warning>,
}

impl TermPlan {
    fn empty(term: u8, warning: Option<Warning>) -> Self {
        Self {
            term,
            courses: Vec::new(),
            total_credits: 0.0,
            course_count: 0,
            weekly_grid: WeeklyGrid::empty(),
            load_per_day: BTreeMap::new(),
            full_time: false,
            warning,
        }
    }
}

/// Aggregate statistics over a completed (or partial) trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryStats {
    /// Number of courses approved by the end of the plan.
    pub approved_count: usize,
    /// Number of courses still pending.
    pub pending_count: usize,
    /// `approved_count / (approved_count + pending_count) * 100`.
    pub percent_progress: f32,
}

/// The full multi-term plan returned by [`plan_trajectory`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPlan {
    /// Number of terms actually planned (`plan_per_term.len()`).
    pub terms_remaining: u8,
    /// Courses still pending once the plan ends.
    pub total_pending: usize,
    /// Per-term plans, keyed by term number; a strictly increasing sequence
    /// starting at the student's current term.
    pub plan_per_term: BTreeMap<u8, TermPlan>,
    /// Aggregate statistics.
    pub stats: TrajectoryStats,
    /// A coarse "Month Year" graduation estimate.
    pub estimated_graduation: String,
    /// A non-fatal warning, set when the planner stalled before emptying
    /// the pending pool.
    pub warning: Option<Warning>,
}

/// §4.4: repeatedly snapshots a virtual student, resolves eligibility,
/// schedules up to the per-status course cap, and advances one term until
/// no pending courses remain (capped at `MAX_TERMS`).
#[must_use]
pub fn plan_trajectory(catalog: &Catalog, student: &Student, rng: &mut SmallRng) -> TrajectoryPlan {
    let mut virtual_student = student.to_virtual();
    let total_courses = catalog.courses().count();
    let mut pending: Vec<CourseId> = catalog
        .courses()
        .map(|c| c.id)
        .filter(|id| !virtual_student.has_approved(*id))
        .collect();

    let mut plan_per_term: BTreeMap<u8, TermPlan> = BTreeMap::new();
    let mut term = student.current_term;
    let mut warning = None;
    let mut iterations = 0u32;

    loop {
        iterations += 1;
        virtual_student.simulated_enrollments.clear();
        if pending.is_empty() {
            break;
        }
        if term > MAX_TERMS || iterations > SAFETY_ITERATION_CAP {
            warning = Some(Warning::PlannerStall {
                terms_completed: u8::try_from(plan_per_term.len()).unwrap_or(u8::MAX),
            });
            break;
        }

        if let Some(residency_id) = regular_track_residency(catalog, &virtual_student, term) {
            let term_plan = simulate_term(catalog, &virtual_student, &[residency_id], term, rng);
            approve_scheduled(&mut virtual_student, &mut pending, &term_plan);
            plan_per_term.insert(term, term_plan);
            term += 1;
            continue;
        }

        let eligible = eligibility::eligible_courses(catalog, &virtual_student);
        if let Some(residency_id) = eligible
            .iter()
            .copied()
            .find(|&id| catalog.course(id).is_some_and(Course::is_residency))
        {
            let term_plan = simulate_term(catalog, &virtual_student, &[residency_id], term, rng);
            approve_scheduled(&mut virtual_student, &mut pending, &term_plan);
            plan_per_term.insert(term, term_plan);
            term += 1;
            continue;
        }

        let candidates = candidate_courses(catalog, &virtual_student, &pending, term);
        if candidates.is_empty() {
            plan_per_term.insert(term, TermPlan::empty(term, Some(Warning::EmptyEligibility)));
            term += 1;
            continue;
        }

        let term_plan = simulate_term(catalog, &virtual_student, &candidates, term, rng);
        approve_scheduled(&mut virtual_student, &mut pending, &term_plan);
        plan_per_term.insert(term, term_plan);
        term += 1;
    }

    let approved_count = total_courses.saturating_sub(pending.len());
    let percent_progress = if total_courses == 0 {
        100.0
    } else {
        (approved_count as f32 / total_courses as f32) * 100.0
    };

    TrajectoryPlan {
        terms_remaining: u8::try_from(plan_per_term.len()).unwrap_or(u8::MAX),
        total_pending: pending.len(),
        estimated_graduation: estimate_graduation(plan_per_term.len()),
        plan_per_term,
        stats: TrajectoryStats {
            approved_count,
            pending_count: pending.len(),
            percent_progress,
        },
        warning,
    }
}

fn approve_scheduled(virtual_student: &mut Student, pending: &mut Vec<CourseId>, term_plan: &TermPlan) {
    for scheduled in &term_plan.courses {
        virtual_student.approve(scheduled.course_id);
        pending.retain(|&c| c != scheduled.course_id);
    }
}

/// §4.4 step 1: "Regular-track residency pinning." Bypasses the Eligibility
/// Resolver entirely for a Regular student whose current term is 6 or 10.
fn regular_track_residency(catalog: &Catalog, virtual_student: &Student, term: u8) -> Option<CourseId> {
    if !virtual_student.is_regular() || (term != 6 && term != 10) {
        return None;
    }
    catalog
        .courses()
        .find(|c| c.term == term && c.is_residency() && !virtual_student.has_approved(c.id))
        .map(|c| c.id)
}

fn candidate_courses(catalog: &Catalog, virtual_student: &Student, pending: &[CourseId], term: u8) -> Vec<CourseId> {
    if virtual_student.is_regular() {
        pending
            .iter()
            .copied()
            .filter(|&cid| {
                catalog.course(cid).is_some_and(|c| c.term == term)
                    && catalog.prereqs().satisfied(cid, &virtual_student.approved)
            })
            .collect()
    } else {
        let mut scored: Vec<(CourseId, f32)> = pending
            .iter()
            .copied()
            .filter(|&cid| {
                catalog.course(cid).is_some_and(|c| c.term <= term)
                    && catalog.prereqs().satisfied(cid, &virtual_student.approved)
                    && catalog.course(cid).is_some_and(|c| {
                        c.kind != CourseKind::IntegratorProject
                            || catalog.project_deps().satisfied(cid, &virtual_student.approved)
                    })
            })
            .map(|cid| (cid, priority_score(catalog, virtual_student, cid, term)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().take(5).map(|(cid, _)| cid).collect()
    }
}

/// §4.4 "Priority Heuristic".
fn priority_score(catalog: &Catalog, student: &Student, course_id: CourseId, current_term: u8) -> f32 {
    let Some(course) = catalog.course(course_id) else {
        return 0.0;
    };
    let mut score = 0.0_f32;

    let backlog = f32::from(current_term) - f32::from(course.term);
    if backlog > 0.0 {
        score += 15.0 * backlog;
    }

    score += 10.0 * catalog.prereqs().out_degree(course_id) as f32;

    if course.is_integrator_project() {
        score += 20.0;
    }
    if course.is_residency() {
        score += 30.0;
    }
    if course.term == current_term {
        score += 8.0;
    }

    if student.is_regular() {
        if course.term > current_term {
            score -= 15.0;
        }
    } else if course.term > current_term + 2 {
        score -= 5.0;
    }

    score
}

/// §4.5 "Term Simulator": synthesizes plausible meetings for a term's
/// courses without consulting the Section Catalog's Groups.
#[must_use]
pub fn simulate_term(
    catalog: &Catalog,
    virtual_student: &Student,
    course_ids: &[CourseId],
    term_number: u8,
    rng: &mut SmallRng,
) -> TermPlan {
    let courses: Vec<&Course> = course_ids.iter().filter_map(|&id| catalog.course(id)).collect();

    if let Some(residency) = courses.iter().find(|c| c.is_residency()) {
        return simulate_residency_term(residency, term_number);
    }

    let target = if virtual_student.is_regular() { 7 } else { 5 };
    let selected: Vec<&Course> = courses.into_iter().take(target).collect();

    let mut day_load = [0.0_f32; 5];
    let mut scheduled = Vec::with_capacity(selected.len());

    for course in selected {
        let meetings = synthesize_meetings(course, current_term_number(virtual_student, term_number), &mut day_load, rng);
        scheduled.push(ScheduledCourse {
            course_id: course.id,
            course_name: course.name.clone(),
            group_id: 0,
            instructor: "Por asignar".to_string(),
            credits: course.credits,
            course_term: course.term,
            kind: course.kind,
            meetings,
        });
    }

    let total_credits = scheduled.iter().map(|c| c.credits).sum();
    let course_count = scheduled.len();
    let weekly_grid = build_weekly_grid(&scheduled);
    let load_per_day = (1..=5u8).map(|d| (d, day_load[usize::from(d) - 1])).collect();

    TermPlan {
        term: term_number,
        courses: scheduled,
        total_credits,
        course_count,
        weekly_grid,
        load_per_day,
        full_time: false,
        warning: None,
    }
}

const fn current_term_number(_virtual_student: &Student, term_number: u8) -> u8 {
    term_number
}

fn simulate_residency_term(residency: &Course, term_number: u8) -> TermPlan {
    let meetings = vec![
        (1, 8, 12, "Residency Site".to_string()),
        (1, 13, 17, "Residency Site".to_string()),
        (2, 8, 12, "Residency Site".to_string()),
        (2, 13, 17, "Residency Site".to_string()),
        (3, 8, 12, "Residency Site".to_string()),
        (3, 13, 17, "Residency Site".to_string()),
        (4, 8, 12, "Residency Site".to_string()),
        (4, 13, 17, "Residency Site".to_string()),
        (5, 8, 12, "Residency Site".to_string()),
        (5, 13, 17, "Residency Site".to_string()),
    ];
    let scheduled = ScheduledCourse {
        course_id: residency.id,
        course_name: residency.name.clone(),
        group_id: 0,
        instructor: "Por asignar".to_string(),
        credits: residency.credits,
        course_term: residency.term,
        kind: residency.kind,
        meetings: meetings.clone(),
    };
    let weekly_grid = build_weekly_grid(std::slice::from_ref(&scheduled));
    let load_per_day = (1..=5u8).map(|d| (d, 8.0)).collect();

    TermPlan {
        term: term_number,
        courses: vec![scheduled],
        total_credits: residency.credits,
        course_count: 1,
        weekly_grid,
        load_per_day,
        full_time: true,
        warning: None,
    }
}

/// Time-of-day buckets for non-advanced courses: `(start, end, weight)`.
const TIME_OF_DAY_BUCKETS: [(u8, u8, f32); 3] = [(8, 12, 0.6), (12, 16, 0.3), (16, 20, 0.1)];

fn synthesize_meetings(
    course: &Course,
    current_term: u8,
    day_load: &mut [f32; 5],
    rng: &mut SmallRng,
) -> Vec<(u8, u8, u8, String)> {
    let weekly_hours = course.hours / 15.0;
    let sessions = if weekly_hours <= 3.0 {
        1
    } else if weekly_hours <= 5.0 {
        2
    } else {
        3
    };
    let duration = (weekly_hours / sessions as f32).ceil().max(2.0).min(4.0) as u8;

    let advanced = current_term >= 7 || course.term >= 7;
    let mut first_start: Option<u8> = None;
    let mut meetings = Vec::with_capacity(sessions);
    let mut used_days: HashSet<u8> = HashSet::new();

    for _ in 0..sessions {
        let day = least_loaded_day(day_load, &used_days);
        used_days.insert(day);
        let start = first_start.unwrap_or_else(|| {
            let start = pick_start_hour(advanced, rng);
            first_start = Some(start);
            start
        });
        let end = (start + duration).min(22);
        let end = if end <= start { start + 1 } else { end };

        day_load[usize::from(day) - 1] += f32::from(end - start);
        meetings.push((day, start, end, random_room(rng)));
    }

    meetings
}

/// Picks the lowest-load day not already used by this course's earlier
/// sessions. Falls back to the lowest-load day overall if every day is
/// already taken (more sessions than weekdays).
fn least_loaded_day(day_load: &[f32; 5], used_days: &HashSet<u8>) -> u8 {
    let mut best_day: Option<u8> = None;
    let mut best_load = f32::MAX;
    for (idx, &load) in day_load.iter().enumerate() {
        let day = u8::try_from(idx + 1).unwrap_or(5);
        if used_days.contains(&day) {
            continue;
        }
        if load < best_load {
            best_load = load;
            best_day = Some(day);
        }
    }
    best_day.unwrap_or_else(|| {
        day_load
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map_or(1, |(idx, _)| u8::try_from(idx + 1).unwrap_or(5))
    })
}

fn pick_start_hour(advanced: bool, rng: &mut SmallRng) -> u8 {
    if advanced {
        return rng.gen_range(8..20);
    }
    let roll: f32 = rng.gen_range(0.0..1.0);
    let mut cumulative = 0.0;
    for &(start, end, weight) in &TIME_OF_DAY_BUCKETS {
        cumulative += weight;
        if roll <= cumulative {
            return rng.gen_range(start..end);
        }
    }
    TIME_OF_DAY_BUCKETS[0].0
}

fn random_room(rng: &mut SmallRng) -> String {
    const BUILDINGS: [char; 4] = ['A', 'B', 'C', 'D'];
    let building = BUILDINGS[rng.gen_range(0..BUILDINGS.len())];
    let floor = rng.gen_range(1..5);
    let room = rng.gen_range(0..20);
    format!("{building}{floor}{room:02}")
}

fn build_weekly_grid(courses: &[ScheduledCourse]) -> WeeklyGrid {
    let mut grid = WeeklyGrid::empty();
    for course in courses {
        for &(day, start, end, ref room) in &course.meetings {
            for hour in start..end {
                grid.place(
                    day,
                    hour,
                    Occupant {
                        course_name: course.course_name.clone(),
                        instructor: course.instructor.clone(),
                        room: room.clone(),
                        group_id: course.group_id,
                    },
                );
            }
        }
    }
    grid
}

/// Coarse current month/year, derived from the system clock with a
/// 365.25-day year and 30-day month approximation — not exact calendar
/// arithmetic, per §1's Non-goals.
fn current_month_year() -> (u32, i32) {
    let days = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() / 86400)
        .unwrap_or(0);
    let year = 1970 + (days as f64 / 365.25) as i32;
    let day_of_year = (days as f64 % 365.25) as u32;
    let month = (day_of_year / 30 + 1).clamp(1, 12);
    (month, year)
}

fn estimate_graduation(remaining_terms: usize) -> String {
    let (month, mut year) = current_month_year();
    let mut calendar_term = calendar_term_of(month);
    for _ in 0..remaining_terms {
        calendar_term += 1;
        if calendar_term > 3 {
            calendar_term = 1;
            year += 1;
        }
    }
    let month_name = match calendar_term {
        1 => "April",
        2 => "August",
        _ => "December",
    };
    format!("{month_name} {year}")
}

const fn calendar_term_of(month: u32) -> u8 {
    match month {
        1..=4 => 1,
        5..=8 => 2,
        _ => 3,
    }
}

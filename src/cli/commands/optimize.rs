//! `optimize` command handler.

use crate::args::StudentArgs;
use crate::fixtures;
use std::time::{SystemTime, UNIX_EPOCH};
use trajplan::core::config::Config;
use trajplan::core::Optimizer;

#[allow(clippy::too_many_arguments)]
pub fn run(
    student_args: &StudentArgs,
    config: &Config,
    population_size: Option<u32>,
    generations: Option<u32>,
    crossover_rate: Option<f32>,
    mutation_rate: Option<f32>,
    restrict_to_groups: &[u32],
    seed: Option<u64>,
    json: bool,
) {
    let (courses, groups, prereqs, project_deps) = fixtures::sample_parts();
    let seed = seed.unwrap_or_else(fallback_seed);
    let mut optimizer = Optimizer::with_seed(courses, groups, prereqs, project_deps, seed);
    let student = student_args.to_student();

    let restrict = if restrict_to_groups.is_empty() {
        None
    } else {
        Some(restrict_to_groups)
    };

    let population_size = population_size.unwrap_or(config.planner.population_size) as usize;
    let generations = generations.unwrap_or(config.planner.generations) as usize;
    let crossover_rate = crossover_rate.unwrap_or(config.planner.crossover_rate);
    let mutation_rate = mutation_rate.unwrap_or(config.planner.mutation_rate);

    let schedule = optimizer.optimize_term(
        &student,
        population_size,
        generations,
        crossover_rate,
        mutation_rate,
        restrict,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&schedule).unwrap_or_default());
        return;
    }

    if let Some(warning) = &schedule.warning {
        println!("Warning: {warning}");
    }

    if schedule.is_empty() {
        println!("No feasible schedule could be constructed under the given constraints.");
        return;
    }

    println!("Chosen groups:");
    for group_id in &schedule.group_ids {
        if let Some(group) = optimizer.catalog().group(*group_id) {
            let course_name = optimizer
                .catalog()
                .course(group.course_id)
                .map_or_else(|| "Unknown".to_string(), |c| c.name.clone());
            println!("  [{group_id}] {course_name} — {}", group.instructor);
        }
    }
}

/// A process-time-derived fallback seed, used only when `--seed` is omitted.
fn fallback_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}

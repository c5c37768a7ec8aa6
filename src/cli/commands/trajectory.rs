//! `trajectory` command handler.

use crate::args::StudentArgs;
use crate::fixtures;
use std::time::{SystemTime, UNIX_EPOCH};
use trajplan::core::Optimizer;

pub fn run(student_args: &StudentArgs, seed: Option<u64>, json: bool) {
    let (courses, groups, prereqs, project_deps) = fixtures::sample_parts();
    let seed = seed.unwrap_or_else(fallback_seed);
    let mut optimizer = Optimizer::with_seed(courses, groups, prereqs, project_deps, seed);
    let student = student_args.to_student();

    let plan = optimizer.plan_trajectory(&student);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan).unwrap_or_default());
        return;
    }

    println!("Estimated graduation: {}", plan.estimated_graduation);
    println!(
        "Progress: {} approved, {} pending ({:.1}%)",
        plan.stats.approved_count, plan.stats.pending_count, plan.stats.percent_progress
    );
    println!("Terms planned: {}", plan.terms_remaining);
    if let Some(warning) = &plan.warning {
        println!("Warning: {warning}");
    }

    for (term, term_plan) in &plan.plan_per_term {
        println!("\nTerm {term} ({} credits, {} courses):", term_plan.total_credits, term_plan.course_count);
        for course in &term_plan.courses {
            println!("  [{}] {}", course.course_id, course.course_name);
        }
        if let Some(warning) = &term_plan.warning {
            println!("  Warning: {warning}");
        }
    }

    if plan.total_pending > 0 {
        println!("\n{} course(s) remain pending beyond the planned horizon.", plan.total_pending);
    }
}

/// A process-time-derived fallback seed, used only when `--seed` is omitted.
fn fallback_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}

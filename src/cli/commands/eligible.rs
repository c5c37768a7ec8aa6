//! `eligible` command handler.

use crate::args::StudentArgs;
use crate::fixtures;
use serde::Serialize;
use trajplan::core::Optimizer;

#[derive(Serialize)]
struct EligibleCourse {
    id: u32,
    name: String,
    term: u8,
}

pub fn run(student_args: &StudentArgs, json: bool) {
    let (courses, groups, prereqs, project_deps) = fixtures::sample_parts();
    let optimizer = Optimizer::new(courses, groups, prereqs, project_deps);
    let student = student_args.to_student();

    let eligible: Vec<EligibleCourse> = optimizer
        .eligible_courses(&student)
        .into_iter()
        .filter_map(|course_id| {
            optimizer.catalog().course(course_id).map(|c| EligibleCourse {
                id: course_id,
                name: c.name.clone(),
                term: c.term,
            })
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&eligible).unwrap_or_default());
        return;
    }

    if eligible.is_empty() {
        println!("No course is eligible for this student.");
        return;
    }

    println!("Eligible courses:");
    for course in eligible {
        println!("  [{}] {} (term {})", course.id, course.name, course.term);
    }
}

//! `schedule` command handler.

use crate::fixtures;
use trajplan::core::Optimizer;

pub fn run(group_ids: &[u32], json: bool) {
    let (courses, groups, prereqs, project_deps) = fixtures::sample_parts();
    let optimizer = Optimizer::new(courses, groups, prereqs, project_deps);

    let grid = optimizer.materialize_weekly(group_ids);

    if json {
        println!("{}", serde_json::to_string_pretty(&grid).unwrap_or_default());
        return;
    }

    for (day, slots) in &grid.days {
        let occupied: Vec<_> = slots.iter().filter_map(|(hour, slot)| slot.as_ref().map(|o| (hour, o))).collect();
        if occupied.is_empty() {
            continue;
        }
        println!("{day}:");
        for (hour, occupant) in occupied {
            println!(
                "  {hour} [{}] {} — {} ({})",
                occupant.group_id, occupant.course_name, occupant.instructor, occupant.room
            );
        }
    }
}

//! Weekly Schedule Materializer (§4.2): projects a chosen set of Group ids
//! onto a 5-day x (07:00-21:00) grid.
//!
//! A pure projection — it introduces no new constraints and is idempotent
//! (calling it twice on the same input yields equal grids, per Testable
//! Property 9).

use super::catalog::Catalog;
use super::models::{GroupId, Occupant, WeeklyGrid};

/// Materialize a weekly grid from a chosen set of group ids. Meetings whose
/// day/hours fall outside the valid window, or with `start >= end`, are
/// dropped silently (`Meeting::is_valid`).
#[must_use]
pub fn materialize(catalog: &Catalog, group_ids: &[GroupId]) -> WeeklyGrid {
    let mut grid = WeeklyGrid::empty();

    for &group_id in group_ids {
        let Some(group) = catalog.group(group_id) else {
            continue;
        };
        let course_name = catalog
            .course(group.course_id)
            .map_or_else(|| "Unknown".to_string(), |c| c.name.clone());

        for meeting in &group.meetings {
            if !meeting.is_valid() {
                continue;
            }
            for hour in meeting.start_hour..meeting.end_hour {
                grid.place(
                    meeting.day,
                    hour,
                    Occupant {
                        course_name: course_name.clone(),
                        instructor: group.instructor.clone(),
                        room: meeting.room.clone(),
                        group_id: group.id,
                    },
                );
            }
        }
    }

    grid
}

//! `WeeklyGrid`: a pure projection of chosen Groups onto a 5-day schedule.

use super::GroupId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Day names in scheduling order, indexed 1..5 (Monday..Friday).
pub const DAY_NAMES: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// First and last displayed hour of the weekly grid, per §4.2.
pub const GRID_START_HOUR: u8 = 7;
/// Last hour slot that appears in the grid (inclusive).
pub const GRID_END_HOUR: u8 = 21;

/// A class occupying one hour slot of a [`WeeklyGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    /// Course display name.
    pub course_name: String,
    /// Instructor name.
    pub instructor: String,
    /// Room tag.
    pub room: String,
    /// Originating group id.
    pub group_id: GroupId,
}

/// For each day name, a map of `"H:00"` slot to an occupant or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyGrid {
    /// Day name -> slot label -> occupant, if any.
    pub days: BTreeMap<String, BTreeMap<String, Option<Occupant>>>,
}

impl WeeklyGrid {
    /// Build an empty grid with every day/hour slot present and unoccupied.
    #[must_use]
    pub fn empty() -> Self {
        let mut days = BTreeMap::new();
        for name in DAY_NAMES {
            let mut slots = BTreeMap::new();
            for hour in GRID_START_HOUR..=GRID_END_HOUR {
                slots.insert(format!("{hour}:00"), None);
            }
            days.insert(name.to_string(), slots);
        }
        Self { days }
    }

    /// Place `occupant` at `day`/`hour`, if that slot exists in the grid.
    /// Silently does nothing for an out-of-range day or hour.
    pub fn place(&mut self, day_index: u8, hour: u8, occupant: Occupant) {
        let Some(name) = day_name(day_index) else {
            return;
        };
        if !(GRID_START_HOUR..=GRID_END_HOUR).contains(&hour) {
            return;
        }
        if let Some(slots) = self.days.get_mut(name) {
            slots.insert(format!("{hour}:00"), Some(occupant));
        }
    }
}

/// Map a 1-indexed day number (Monday=1..Friday=5) to its display name.
#[must_use]
pub fn day_name(day_index: u8) -> Option<&'static str> {
    if (1..=5).contains(&day_index) {
        Some(DAY_NAMES[usize::from(day_index) - 1])
    } else {
        None
    }
}

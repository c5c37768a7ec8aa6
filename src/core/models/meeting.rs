//! A single weekly occurrence of a [`Group`](super::Group).

use serde::{Deserialize, Serialize};

/// A weekly meeting slot: a day of the week plus an hour span and room.
///
/// Hours are integer buckets (whole-hour granularity); there is no sub-hour
/// representation in this model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Day of week, 1 (Monday) through 5 (Friday).
    pub day: u8,
    /// Start hour, inclusive.
    pub start_hour: u8,
    /// End hour, exclusive.
    pub end_hour: u8,
    /// Room tag (e.g. "A203").
    pub room: String,
}

impl Meeting {
    /// Create a new meeting.
    #[must_use]
    pub fn new(day: u8, start_hour: u8, end_hour: u8, room: impl Into<String>) -> Self {
        Self {
            day,
            start_hour,
            end_hour,
            room: room.into(),
        }
    }

    /// Whether this meeting falls within the valid scheduling window:
    /// day in [1,5], hours within [7,22], and `start < end`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.day >= 1
            && self.day <= 5
            && self.start_hour < self.end_hour
            && self.start_hour >= 7
            && self.end_hour <= 22
    }

    /// Number of hours this meeting occupies.
    #[must_use]
    pub const fn duration(&self) -> u8 {
        self.end_hour - self.start_hour
    }

    /// Whether two meetings overlap: same day and overlapping hour ranges.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start_hour < other.end_hour && other.start_hour < self.end_hour
    }
}

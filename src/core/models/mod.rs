//! Data models for the trajectory planner

pub mod course;
pub mod graph;
pub mod group;
pub mod meeting;
pub mod schedule;
pub mod student;
pub mod weekly_grid;

pub use course::{Course, CourseId, CourseKind};
pub use graph::{PrereqGraph, ProjectDepGraph};
pub use group::{Group, GroupId};
pub use meeting::Meeting;
pub use schedule::Schedule;
pub use student::{Preferences, Student, StudentId, StudentStatus, TimeOfDay};
pub use weekly_grid::{Occupant, WeeklyGrid};

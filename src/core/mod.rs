//! Core trajectory-planning engine.
//!
//! The core is a constraint-aware optimization and simulation library: it
//! consumes a pre-loaded in-memory curriculum (courses, groups, meetings,
//! prerequisite and project-dependency graphs) and a student record, and
//! returns structured results. It performs no I/O and no logging of its own
//! — those are the CLI layer's concerns.

pub mod catalog;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod ga;
pub mod materializer;
pub mod models;
pub mod optimizer;
pub mod trajectory;

pub use optimizer::Optimizer;

/// Returns the current version of the `trajplan` crate.
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

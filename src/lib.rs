//! Core library for `trajplan`: eligibility resolution, single-term
//! genetic-algorithm optimization, multi-term trajectory planning, and
//! weekly schedule materialization over a curriculum/course/section model.

pub mod core;

pub use core::*;
// No logger re-exports: use the standalone `logger` crate directly.

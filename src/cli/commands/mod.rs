//! CLI command handlers for `trajplan`.
//!
//! - [`config`] - Configuration management
//! - [`eligible`] - Eligibility Resolver
//! - [`optimize`] - Single-term genetic-algorithm optimizer
//! - [`trajectory`] - Multi-term trajectory planner
//! - [`schedule`] - Weekly schedule materializer

pub mod config;
pub mod eligible;
pub mod optimize;
pub mod schedule;
pub mod trajectory;

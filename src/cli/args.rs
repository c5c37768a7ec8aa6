//! CLI argument definitions for `trajplan`.

use clap::{Parser, Subcommand, ValueEnum};
use std::collections::HashSet;
use trajplan::core::config::ConfigOverrides;
use trajplan::core::models::{Preferences, Student, StudentStatus, TimeOfDay};

use logger::Level;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum StatusArg {
    Regular,
    Irregular,
}

impl From<StatusArg> for StudentStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Regular => Self::Regular,
            StatusArg::Irregular => Self::Irregular,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `generations`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Shared student-construction flags for the `eligible`, `optimize`, and
/// `trajectory` subcommands, applied against the CLI's embedded sample
/// catalog (see `fixtures::sample_catalog`).
#[derive(Parser, Debug, Clone)]
pub struct StudentArgs {
    /// The student's current term.
    #[arg(long, default_value_t = 1)]
    pub term: u8,

    /// Regular (on-plan) or irregular (off-plan) track.
    #[arg(long, value_enum, default_value_t = StatusArg::Regular)]
    pub status: StatusArg,

    /// Credits accumulated so far.
    #[arg(long, default_value_t = 0.0)]
    pub credits_accumulated: f32,

    /// Maximum credits the student may carry this term.
    #[arg(long, default_value_t = 18.0)]
    pub credit_cap: f32,

    /// Comma-separated list of already-approved course ids.
    #[arg(long = "approved", value_delimiter = ',')]
    pub approved: Vec<u32>,
}

impl StudentArgs {
    #[must_use]
    pub fn to_student(&self) -> Student {
        let approved: HashSet<u32> = self.approved.iter().copied().collect();
        Student::new(
            1,
            "Sample Student",
            self.term,
            self.status.into(),
            self.credits_accumulated,
            self.credit_cap,
            approved,
            Preferences::new(TimeOfDay::Morning, HashSet::new()),
        )
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List the courses a student is eligible to register for.
    Eligible {
        #[command(flatten)]
        student: StudentArgs,
    },
    /// Run the single-term genetic-algorithm optimizer for a student.
    Optimize {
        #[command(flatten)]
        student: StudentArgs,

        /// GA population size (overrides the configured default).
        #[arg(long)]
        population_size: Option<u32>,

        /// Number of GA generations (overrides the configured default).
        #[arg(long)]
        generations: Option<u32>,

        /// Crossover probability in [0, 1] (overrides the configured default).
        #[arg(long)]
        crossover_rate: Option<f32>,

        /// Mutation probability in [0, 1] (overrides the configured default).
        #[arg(long)]
        mutation_rate: Option<f32>,

        /// Restrict the search to this comma-separated list of group ids.
        #[arg(long, value_delimiter = ',')]
        restrict_to_groups: Vec<u32>,

        /// Seed the PRNG for a reproducible run.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Forward-simulate a student's trajectory to graduation.
    Trajectory {
        #[command(flatten)]
        student: StudentArgs,

        /// Seed the PRNG for a reproducible run.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Materialize a weekly schedule from a chosen list of group ids.
    Schedule {
        /// Comma-separated list of group ids to place on the weekly grid.
        #[arg(long = "groups", value_delimiter = ',')]
        group_ids: Vec<u32>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "trajplan",
    about = "Academic trajectory planner command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<std::path::PathBuf>,

    /// Print subcommand results as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<std::path::PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose")]
    pub config_verbose: Option<bool>,

    /// Override the configured GA population size
    #[arg(long = "config-population-size")]
    pub config_population_size: Option<u32>,

    /// Override the configured GA generation count
    #[arg(long = "config-generations")]
    pub config_generations: Option<u32>,

    /// Override the configured crossover rate
    #[arg(long = "config-crossover-rate")]
    pub config_crossover_rate: Option<f32>,

    /// Override the configured mutation rate
    #[arg(long = "config-mutation-rate")]
    pub config_mutation_rate: Option<f32>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            population_size: self.config_population_size,
            generations: self.config_generations,
            crossover_rate: self.config_crossover_rate,
            mutation_rate: self.config_mutation_rate,
        }
    }
}

//! Configuration for the `trajplan` CLI: logging and planner defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace).
    #[serde(default)]
    pub level: String,
    /// Log file path.
    #[serde(default)]
    pub file: String,
    /// Enable verbose output.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: "$TRAJPLAN/logs/trajplan.log".to_string(),
            verbose: false,
        }
    }
}

/// Default parameters the CLI feeds into [`crate::core::Optimizer::optimize_term`]
/// when the user does not override them on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerDefaults {
    /// GA population size.
    #[serde(default)]
    pub population_size: u32,
    /// Number of GA generations to run.
    #[serde(default)]
    pub generations: u32,
    /// Crossover probability, in `[0, 1]`.
    #[serde(default)]
    pub crossover_rate: f32,
    /// Mutation probability, in `[0, 1]`.
    #[serde(default)]
    pub mutation_rate: f32,
}

impl Default for PlannerDefaults {
    fn default() -> Self {
        Self {
            population_size: 60,
            generations: 120,
            crossover_rate: 0.8,
            mutation_rate: 0.15,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Planner defaults.
    #[serde(default)]
    pub planner: PlannerDefaults,
}

/// Optional CLI overrides for configuration values.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level.
    pub level: Option<String>,
    /// Override log file path.
    pub file: Option<String>,
    /// Override verbose flag.
    pub verbose: Option<bool>,
    /// Override GA population size.
    pub population_size: Option<u32>,
    /// Override GA generation count.
    pub generations: Option<u32>,
    /// Override crossover rate.
    pub crossover_rate: Option<f32>,
    /// Override mutation rate.
    pub mutation_rate: Option<f32>,
}

impl Config {
    /// Get the `$TRAJPLAN` directory path.
    ///
    /// - Linux: `~/.config/trajplan`
    /// - macOS: `~/Library/Application Support/trajplan`
    /// - Windows: `%APPDATA%\trajplan`
    #[must_use]
    pub fn get_trajplan_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trajplan")
    }

    /// Merge missing/zeroed fields from `defaults` into this config.
    ///
    /// Used when loading configuration so that newly added fields are
    /// populated without clobbering existing user settings.
    ///
    /// Returns `true` if any field was changed.
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.planner.population_size == 0 {
            self.planner.population_size = defaults.planner.population_size;
            changed = true;
        }
        if self.planner.generations == 0 {
            self.planner.generations = defaults.planner.generations;
            changed = true;
        }
        if self.planner.crossover_rate <= 0.0 {
            self.planner.crossover_rate = defaults.planner.crossover_rate;
            changed = true;
        }
        if self.planner.mutation_rate <= 0.0 {
            self.planner.mutation_rate = defaults.planner.mutation_rate;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration.
    ///
    /// Only `Some` fields in `overrides` replace config values; the rest are
    /// left untouched.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(population_size) = overrides.population_size {
            self.planner.population_size = population_size;
        }
        if let Some(generations) = overrides.generations {
            self.planner.generations = generations;
        }
        if let Some(crossover_rate) = overrides.crossover_rate {
            self.planner.crossover_rate = crossover_rate;
        }
        if let Some(mutation_rate) = overrides.mutation_rate {
            self.planner.mutation_rate = mutation_rate;
        }
    }

    /// The user config file path, platform-specific, under
    /// [`get_trajplan_dir`](Self::get_trajplan_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_trajplan_dir().join(CONFIG_FILE_NAME)
    }

    /// Replace occurrences of `$TRAJPLAN` in `value` with the actual config
    /// directory path.
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$TRAJPLAN") {
            let trajplan_dir = Self::get_trajplan_dir();
            value.replace("$TRAJPLAN", trajplan_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Parse a TOML configuration string, expanding `$TRAJPLAN` in path-like
    /// fields.
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;
        config.logging.file = Self::expand_variables(&config.logging.file);
        Ok(config)
    }

    /// The compiled-in default configuration.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::default()
    }

    /// Load configuration from file, or create one from defaults if none
    /// exists.
    ///
    /// - If the config file exists: load it, merge any missing fields from
    ///   defaults, and persist the merge.
    /// - If it doesn't: create the config directory and save the defaults.
    ///
    /// Falls back to defaults if any step fails.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Serialize this configuration to TOML and write it to the
    /// platform-specific config file, creating the directory if needed.
    ///
    /// # Errors
    /// Returns an error if serialization fails, the directory cannot be
    /// created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by dotted-or-bare key.
    ///
    /// Supported keys: `level`, `file`, `verbose`, `population-size`,
    /// `generations`, `crossover-rate`, `mutation-rate`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "population_size" | "population-size" => Some(self.planner.population_size.to_string()),
            "generations" => Some(self.planner.generations.to_string()),
            "crossover_rate" | "crossover-rate" => Some(self.planner.crossover_rate.to_string()),
            "mutation_rate" | "mutation-rate" => Some(self.planner.mutation_rate.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key. Updates the in-memory config only;
    /// call [`save`](Self::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unrecognized or the value cannot be
    /// parsed into the expected type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "population_size" | "population-size" => {
                self.planner.population_size = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid integer value for 'population-size': '{value}'"))?;
            }
            "generations" => {
                self.planner.generations = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid integer value for 'generations': '{value}'"))?;
            }
            "crossover_rate" | "crossover-rate" => {
                self.planner.crossover_rate = value
                    .parse::<f32>()
                    .map_err(|_| format!("Invalid float value for 'crossover-rate': '{value}'"))?;
            }
            "mutation_rate" | "mutation-rate" => {
                self.planner.mutation_rate = value
                    .parse::<f32>()
                    .map_err(|_| format!("Invalid float value for 'mutation-rate': '{value}'"))?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single configuration value to its default, taken from
    /// `defaults`. Updates the in-memory config only; call
    /// [`save`](Self::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unrecognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "population_size" | "population-size" => {
                self.planner.population_size = defaults.planner.population_size;
            }
            "generations" => self.planner.generations = defaults.planner.generations,
            "crossover_rate" | "crossover-rate" => {
                self.planner.crossover_rate = defaults.planner.crossover_rate;
            }
            "mutation_rate" | "mutation-rate" => {
                self.planner.mutation_rate = defaults.planner.mutation_rate;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete the persisted config file, so the next [`load`](Self::load)
    /// recreates it from defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[planner]")?;
        writeln!(f, "  population_size = {}", self.planner.population_size)?;
        writeln!(f, "  generations = {}", self.planner.generations)?;
        writeln!(f, "  crossover_rate = {}", self.planner.crossover_rate)?;
        write!(f, "  mutation_rate = {}", self.planner.mutation_rate)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_non_empty() {
        let config = Config::from_defaults();
        assert!(!config.logging.level.is_empty());
        assert!(config.planner.population_size > 0);
        assert!(config.planner.generations > 0);
    }

    #[test]
    fn toml_round_trip() {
        let config = Config::from_defaults();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed = Config::from_toml(&toml_str).expect("parse");
        assert_eq!(parsed.planner.population_size, config.planner.population_size);
        assert_eq!(parsed.logging.level, config.logging.level);
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut config = Config::from_defaults();
        config.set("generations", "200").unwrap();
        assert_eq!(config.get("generations"), Some("200".to_string()));
        config.set("crossover-rate", "0.5").unwrap();
        assert_eq!(config.get("crossover_rate"), Some("0.5".to_string()));
    }

    #[test]
    fn set_unknown_key_errors() {
        let mut config = Config::from_defaults();
        assert!(config.set("bogus", "1").is_err());
    }

    #[test]
    fn unset_restores_default() {
        let mut config = Config::from_defaults();
        let defaults = Config::from_defaults();
        config.set("mutation_rate", "0.99").unwrap();
        config.unset("mutation_rate", &defaults).unwrap();
        assert!((config.planner.mutation_rate - defaults.planner.mutation_rate).abs() < f32::EPSILON);
    }

    #[test]
    fn apply_overrides_only_touches_set_fields() {
        let mut config = Config::from_defaults();
        let original_generations = config.planner.generations;
        let overrides = ConfigOverrides {
            level: Some("debug".to_string()),
            ..Default::default()
        };
        config.apply_overrides(&overrides);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.planner.generations, original_generations);
    }

    #[test]
    fn merge_defaults_fills_zeroed_fields() {
        let mut config = Config {
            logging: LoggingConfig {
                level: String::new(),
                file: String::new(),
                verbose: false,
            },
            planner: PlannerDefaults {
                population_size: 0,
                generations: 0,
                crossover_rate: 0.0,
                mutation_rate: 0.0,
            },
        };
        let defaults = Config::from_defaults();
        assert!(config.merge_defaults(&defaults));
        assert_eq!(config.planner.population_size, defaults.planner.population_size);
    }
}

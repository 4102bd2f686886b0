//! Configuration loading and typed config structures for the village simulation.
//!
//! The canonical configuration lives in `village-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, a loader that reads the file, environment overrides, and a
//! validation pass that rejects configurations a run cannot use.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the reference configuration: 6 agents, 10 days of 24 ticks, basket 3,
//! field 40, regen 20, `p_base` 0.2, synergy 0.15, `p_cap` 0.9, seed 0.

use std::path::Path;

use serde::Deserialize;
use village_agents::{MAX_VITAL, PolicyConfig, VitalsConfig};

use crate::forage::ForageConfig;

/// Environment variable overriding [`RunConfig::seed`].
pub const ENV_SEED: &str = "VILLAGE_SEED";

/// Environment variable overriding [`RunConfig::days`].
pub const ENV_DAYS: &str = "VILLAGE_DAYS";

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override held a value that does not parse.
    #[error("environment variable {var} has invalid value {value:?}")]
    EnvOverride {
        /// Name of the variable.
        var: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },

    /// A configuration value is outside the range a run can use.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Explanation of what is wrong.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `village-config.yaml`. All fields default to
/// the reference values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Run length, population, and seed.
    #[serde(default)]
    pub simulation: RunConfig,

    /// Starting stores and daily regrowth.
    #[serde(default)]
    pub world: WorldConfig,

    /// Forage success odds.
    #[serde(default)]
    pub forage: ForageConfig,

    /// Per-action vital deltas.
    #[serde(default)]
    pub vitals: VitalsConfig,

    /// Decision thresholds.
    #[serde(default)]
    pub policy: PolicyConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file and apply environment overrides.
    ///
    /// - `VILLAGE_SEED` overrides `simulation.seed`
    /// - `VILLAGE_DAYS` overrides `simulation.days`
    ///
    /// The result is not validated; call [`validate`](Self::validate)
    /// before starting a run.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string. No environment lookup.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_SEED) {
            self.simulation.seed = raw.trim().parse().map_err(|_err| ConfigError::EnvOverride {
                var: ENV_SEED,
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = lookup(ENV_DAYS) {
            self.simulation.days = raw.trim().parse().map_err(|_err| ConfigError::EnvOverride {
                var: ENV_DAYS,
                value: raw.clone(),
            })?;
        }
        Ok(())
    }

    /// Reject configurations that cannot drive a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let run = &self.simulation;
        if run.agents == 0 {
            return Err(invalid("simulation.agents", "at least one agent is required"));
        }
        if run.ticks_per_day == 0 {
            return Err(invalid("simulation.ticks_per_day", "must be at least 1"));
        }

        check_probability("forage.p_base", self.forage.p_base)?;
        check_probability("forage.p_cap", self.forage.p_cap)?;
        if !self.forage.synergy.is_finite() || self.forage.synergy < 0.0 {
            return Err(invalid(
                "forage.synergy",
                format!("must be a finite non-negative number, got {}", self.forage.synergy),
            ));
        }

        let vitals = &self.vitals;
        for (field, value) in [
            ("vitals.starting_hunger", vitals.starting_hunger),
            ("vitals.starting_energy", vitals.starting_energy),
            ("vitals.starvation_threshold", vitals.starvation_threshold),
        ] {
            if value > MAX_VITAL {
                return Err(invalid(field, format!("must be at most {MAX_VITAL}, got {value}")));
            }
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, format!("must be within [0, 1], got {value}")))
    }
}

/// Run length, population, and seed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Number of days to simulate.
    #[serde(default = "default_days")]
    pub days: u32,

    /// Ticks in one day.
    #[serde(default = "default_ticks_per_day")]
    pub ticks_per_day: u32,

    /// Number of agents created at start.
    #[serde(default = "default_agents")]
    pub agents: u32,

    /// Seed for the forage random source.
    #[serde(default)]
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            ticks_per_day: default_ticks_per_day(),
            agents: default_agents(),
            seed: 0,
        }
    }
}

/// Starting stores and daily regrowth.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Food in the basket at the start of the run.
    #[serde(default = "default_initial_basket")]
    pub initial_basket: u32,

    /// Stock in the field at the start of the run.
    #[serde(default = "default_initial_field")]
    pub initial_field: u32,

    /// Units added to the field after each day's report.
    #[serde(default = "default_regen")]
    pub regen: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            initial_basket: default_initial_basket(),
            initial_field: default_initial_field(),
            regen: default_regen(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// How day reports are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One human-readable line per day.
    #[default]
    Text,
    /// One JSON object per line per day.
    Json,
}

/// Report output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Report encoding.
    #[serde(default)]
    pub format: ReportFormat,
}

// ---------------------------------------------------------------------------
// Default value functions (required by serde)
// ---------------------------------------------------------------------------

const fn default_days() -> u32 {
    10
}

const fn default_ticks_per_day() -> u32 {
    24
}

const fn default_agents() -> u32 {
    6
}

const fn default_initial_basket() -> u32 {
    3
}

const fn default_initial_field() -> u32 {
    40
}

const fn default_regen() -> u32 {
    20
}

fn default_log_level() -> String {
    String::from("info")
}

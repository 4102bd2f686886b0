//! Simulation binary for the Gatherers' Village simulation.
//!
//! Loads configuration, seeds the random source, runs the configured number
//! of days, and prints one report line per day to stdout.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `village-config.yaml` (or the path in
//!    `VILLAGE_CONFIG`), falling back to defaults when the file is absent
//! 2. Initialize structured logging (tracing, to stderr)
//! 3. Validate the configuration
//! 4. Build the seeded simulation state
//! 5. Run the day loop, printing each report
//! 6. Log the result

mod error;
mod report_callback;

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;
use village_core::config::SimulationConfig;
use village_core::decision::PolicyDecisionSource;
use village_core::runner;
use village_core::tick::SimulationState;

use crate::error::EngineError;
use crate::report_callback::ReportCallback;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "village-config.yaml";

/// Environment variable naming an alternative configuration file.
const CONFIG_PATH_ENV: &str = "VILLAGE_CONFIG";

fn main() -> anyhow::Result<()> {
    // 1. Load configuration.
    let (config, config_source) = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging.level)?;
    info!(config_source = %config_source, "village-engine starting");

    // 3. Validate.
    config.validate().map_err(EngineError::from)?;
    info!(
        agents = config.simulation.agents,
        days = config.simulation.days,
        ticks_per_day = config.simulation.ticks_per_day,
        seed = config.simulation.seed,
        format = ?config.output.format,
        "Configuration loaded"
    );

    // 4. Assemble simulation state.
    let format = config.output.format;
    let mut decision_source = PolicyDecisionSource::new(config.policy.clone());
    let mut state = SimulationState::from_config(config).map_err(EngineError::from)?;

    // 5. Run.
    let mut callback = ReportCallback::new(format, std::io::stdout().lock());
    let result = runner::run_simulation(&mut state, &mut decision_source, &mut callback)
        .map_err(EngineError::from)?;

    // 6. Log results.
    info!(
        days = result.reports.len(),
        total_ticks = result.total_ticks,
        "village-engine shutdown complete"
    );

    Ok(())
}

/// Load the simulation configuration.
///
/// Reads `VILLAGE_CONFIG` if set, otherwise `village-config.yaml` in the
/// working directory. A missing default file yields defaults (still subject
/// to environment overrides); a missing explicit file is an error.
fn load_config() -> Result<(SimulationConfig, String), EngineError> {
    if let Ok(explicit) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(explicit);
        let config = SimulationConfig::from_file(&path)?;
        return Ok((config, path.display().to_string()));
    }

    let path = PathBuf::from(DEFAULT_CONFIG_PATH);
    if path.exists() {
        let config = SimulationConfig::from_file(&path)?;
        Ok((config, path.display().to_string()))
    } else {
        let mut config = SimulationConfig::default();
        config.apply_env_overrides()?;
        Ok((config, String::from("defaults")))
    }
}

/// Install the tracing subscriber. `RUST_LOG` wins over the configured
/// level. Logs are written to stderr.
fn init_logging(level: &str) -> Result<(), EngineError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| EngineError::LogFilter {
            filter: level.to_owned(),
            message: e.to_string(),
        })?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

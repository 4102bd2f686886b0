//! Simulation loop runner.
//!
//! This module provides [`run_simulation`], which drives the configured
//! number of days. Each day:
//!
//! 1. starts a new day on the clock and zeroes the day counters,
//! 2. runs `ticks_per_day` ticks through [`run_tick`],
//! 3. builds the [`DayReport`] and hands it to the [`DayCallback`],
//! 4. regenerates the field by `regen` (after the report, no cap).
//!
//! The loop ends after the last configured day; there is no other
//! termination condition.
//!
//! [`run_tick`]: crate::tick::run_tick

use rand::Rng;
use tracing::{info, warn};
use village_types::DayReport;

use crate::decision::DecisionSource;
use crate::report;
use crate::tick::{self, SimulationState, TickError};

/// Errors that can occur during the simulation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A tick execution failed.
    #[error("tick error: {source}")]
    Tick {
        /// The underlying tick error.
        #[from]
        source: TickError,
    },

    /// Starting a new day failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: crate::clock::ClockError,
    },
}

/// Result of a completed simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// One report per day, in day order.
    pub reports: Vec<DayReport>,
    /// Total number of ticks executed.
    pub total_ticks: u64,
    /// Basket contents at the end of the run.
    pub final_basket: u32,
    /// Field stock at the end of the run (after the last regeneration).
    pub final_field: u32,
}

/// Callback invoked after each day's report is built.
pub trait DayCallback {
    /// Called once per day, in day order, before the field regenerates.
    fn on_day(&mut self, report: &DayReport);
}

/// A no-op day callback.
pub struct NoOpCallback;

impl DayCallback for NoOpCallback {
    fn on_day(&mut self, _report: &DayReport) {}
}

/// Run one full day: ticks, report, then regeneration.
pub fn run_day<R: Rng>(
    state: &mut SimulationState<R>,
    decision_source: &mut dyn DecisionSource,
    callback: &mut dyn DayCallback,
) -> Result<DayReport, RunnerError> {
    let day = state.clock.start_day()?;
    state.day_totals.reset();

    for _ in 0..state.clock.ticks_per_day() {
        tick::run_tick(state, decision_source)?;
    }

    let threshold = state.config.vitals.starvation_threshold;
    let day_report = report::day_report(
        day,
        &state.roster,
        &state.environment,
        state.day_totals,
        threshold,
    );

    info!(
        day,
        basket = day_report.basket,
        field = state.environment.field(),
        avg_hunger = %day_report.avg_hunger,
        avg_energy = %day_report.avg_energy,
        gathered = day_report.gathered,
        eaten = day_report.eaten,
        starvation_warnings = day_report.starvation_warnings,
        "Day complete"
    );
    if day_report.starvation_warnings > 0 {
        let starving: Vec<&str> = state
            .roster
            .iter()
            .filter(|a| a.is_starving(threshold))
            .map(|a| a.name())
            .collect();
        warn!(day, ?starving, threshold, "Agents at starvation threshold");
    }

    callback.on_day(&day_report);

    state.environment.regenerate(state.config.world.regen);

    Ok(day_report)
}

/// Run the simulation for the configured number of days.
pub fn run_simulation<R: Rng>(
    state: &mut SimulationState<R>,
    decision_source: &mut dyn DecisionSource,
    callback: &mut dyn DayCallback,
) -> Result<SimulationResult, RunnerError> {
    let days = state.config.simulation.days;
    info!(
        days,
        ticks_per_day = state.clock.ticks_per_day(),
        agents = state.roster.len(),
        basket = state.environment.basket(),
        field = state.environment.field(),
        seed = state.config.simulation.seed,
        "Simulation starting"
    );

    let mut reports = Vec::with_capacity(usize::try_from(days).unwrap_or_default());
    for _ in 0..days {
        reports.push(run_day(state, decision_source, callback)?);
    }

    let result = SimulationResult {
        reports,
        total_ticks: state.clock.total_ticks(),
        final_basket: state.environment.basket(),
        final_field: state.environment.field(),
    };
    log_simulation_end(&result);
    Ok(result)
}

/// Log the simulation end summary.
pub fn log_simulation_end(result: &SimulationResult) {
    info!(
        days = result.reports.len(),
        total_ticks = result.total_ticks,
        final_basket = result.final_basket,
        final_field = result.final_field,
        "Simulation ended"
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::decision::PolicyDecisionSource;

    /// Records every report it receives.
    #[derive(Default)]
    struct Recorder {
        reports: Vec<DayReport>,
    }

    impl DayCallback for Recorder {
        fn on_day(&mut self, report: &DayReport) {
            self.reports.push(*report);
        }
    }

    fn config(days: u32, ticks_per_day: u32) -> SimulationConfig {
        let mut config = SimulationConfig::default();
        config.simulation.days = days;
        config.simulation.ticks_per_day = ticks_per_day;
        config
    }

    #[test]
    fn runs_every_day_and_tick() {
        let mut state = SimulationState::from_config(config(3, 5)).unwrap();
        let mut recorder = Recorder::default();
        let result = run_simulation(
            &mut state,
            &mut PolicyDecisionSource::default(),
            &mut recorder,
        )
        .unwrap();

        assert_eq!(result.total_ticks, 15);
        assert_eq!(result.reports.len(), 3);
        let days: Vec<u32> = result.reports.iter().map(|r| r.day).collect();
        assert_eq!(days, vec![1, 2, 3]);
        assert_eq!(recorder.reports, result.reports);
    }

    #[test]
    fn zero_days_runs_nothing() {
        let mut state = SimulationState::from_config(config(0, 5)).unwrap();
        let mut recorder = Recorder::default();
        let result = run_simulation(
            &mut state,
            &mut PolicyDecisionSource::default(),
            &mut recorder,
        )
        .unwrap();

        assert!(result.reports.is_empty());
        assert!(recorder.reports.is_empty());
        assert_eq!(result.total_ticks, 0);
        assert_eq!(result.final_field, 40);
    }

    #[test]
    fn field_regenerates_after_report() {
        let mut state = SimulationState::from_config(config(1, 4)).unwrap();
        let mut source = PolicyDecisionSource::default();
        let field_start = state.environment.field();
        let report = run_day(&mut state, &mut source, &mut NoOpCallback).unwrap();
        let regen = state.config.world.regen;
        assert_eq!(state.environment.field(), field_start + regen - report.gathered);
    }

    #[test]
    fn counters_reset_each_day() {
        let mut state = SimulationState::from_config(config(2, 6)).unwrap();
        let result =
            run_simulation(&mut state, &mut PolicyDecisionSource::default(), &mut NoOpCallback)
                .unwrap();
        let gathered: u32 = result.reports.iter().map(|r| r.gathered).sum();
        let field_start = 40;
        let regen_total = 2 * 20;
        assert_eq!(result.final_field, field_start + regen_total - gathered);
        assert_eq!(
            Some(state.day_totals.gathered),
            result.reports.get(1).map(|r| r.gathered)
        );
    }
}

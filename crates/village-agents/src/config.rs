//! Configuration constants and defaults for agent vital mechanics.
//!
//! The [`VitalsConfig`] struct bundles every per-action delta so that
//! callers (tick cycle, tests) can override defaults. It deserializes
//! from the `vitals` section of `village-config.yaml`; any missing key
//! falls back to its default.

use serde::Deserialize;

/// Upper bound of both vital stats. The lower bound is 0.
pub const MAX_VITAL: u32 = 100;

/// Configuration for agent vital mechanics.
///
/// All deltas are whole `u32` values. Hunger rises toward [`MAX_VITAL`]
/// (starving); energy falls toward 0 (exhausted).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VitalsConfig {
    /// Hunger added to every agent at the start of every tick (default: 1).
    pub baseline_hunger: u32,

    /// Energy spent by a forage attempt (default: 12).
    pub forage_energy_cost: u32,

    /// Hunger added by a forage attempt (default: 5).
    pub forage_hunger: u32,

    /// Energy recovered by resting (default: 20).
    pub rest_energy: u32,

    /// Hunger added while resting (default: 2).
    pub rest_hunger: u32,

    /// Hunger removed by eating one unit (default: 30).
    pub eat_hunger_relief: u32,

    /// Energy gained by eating one unit (default: 5).
    pub eat_energy: u32,

    /// Hunger of a freshly created agent (default: 0).
    pub starting_hunger: u32,

    /// Energy of a freshly created agent (default: 100).
    pub starting_energy: u32,

    /// Hunger at or above which an agent counts as a starvation warning
    /// in the day report (default: 95).
    pub starvation_threshold: u32,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self {
            baseline_hunger: 1,
            forage_energy_cost: 12,
            forage_hunger: 5,
            rest_energy: 20,
            rest_hunger: 2,
            eat_hunger_relief: 30,
            eat_energy: 5,
            starting_hunger: 0,
            starting_energy: MAX_VITAL,
            starvation_threshold: 95,
        }
    }
}

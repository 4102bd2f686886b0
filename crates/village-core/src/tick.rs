//! Tick cycle: the phases that drive one step of the village simulation.
//!
//! Each tick runs these phases in order, always visiting agents in roster
//! order:
//!
//! 1. **Baseline** -- every agent gets hungrier by the baseline amount.
//! 2. **Decision** -- the [`DecisionSource`] picks one action per agent from
//!    the post-baseline vitals and a single basket snapshot. The full list
//!    is collected before anything is applied.
//! 3. **Odds** -- count foragers and compute the shared success probability.
//! 4. **Resolution** -- apply actions one agent at a time:
//!    - *eat* takes a unit only if the basket still has one when this agent
//!      is reached. Earlier eaters can empty it, leaving later ones idle.
//!    - *rest* always applies.
//!    - *forage* always costs energy. If the field has stock, exactly one
//!      random value is drawn and compared to the odds; success moves one
//!      unit from the field to the basket. An empty field consumes no draw.
//!
//! Given the same starting state and random source, the tick is fully
//! deterministic.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use village_agents::{AgentRoster, vitals};
use village_types::Action;
use village_world::Environment;

use crate::clock::{ClockError, DayClock};
use crate::config::SimulationConfig;
use crate::decision::{DecisionError, DecisionSource};
use crate::forage;

/// Errors that can occur during tick execution.
#[derive(Debug, thiserror::Error)]
pub enum TickError {
    /// A clock operation failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },

    /// The decision source failed.
    #[error("decision error: {source}")]
    Decision {
        /// The underlying decision error.
        #[from]
        source: DecisionError,
    },
}

/// Per-day counters, reset at the start of each day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayTotals {
    /// Units moved from the field to the basket.
    pub gathered: u32,
    /// Units eaten from the basket.
    pub eaten: u32,
}

impl DayTotals {
    /// Zero both counters.
    pub const fn reset(&mut self) {
        *self = Self {
            gathered: 0,
            eaten: 0,
        };
    }
}

/// Summary of a single tick's execution.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSummary {
    /// 1-based day this tick belongs to.
    pub day: u32,
    /// Ticks executed since the start of the run, including this one.
    pub tick: u64,
    /// Basket count before any agent acted (the decision snapshot).
    pub basket_before: u32,
    /// Field stock before any agent acted.
    pub field_before: u32,
    /// Chosen action per agent, in roster order.
    pub actions: Vec<Action>,
    /// Number of agents that chose to forage.
    pub foragers: u32,
    /// Success probability used for every forage roll this tick.
    pub success_probability: f64,
    /// Random values consumed this tick.
    pub draws: u32,
    /// Units gathered this tick.
    pub gathered: u32,
    /// Units eaten this tick.
    pub eaten: u32,
    /// Agents that chose to eat but found the basket empty.
    pub idle_eaters: u32,
}

/// The mutable simulation state threaded through the tick cycle.
///
/// Owns everything a run mutates: agents, shared stores, the clock, the
/// per-day counters, and the single random source. Nothing is global.
#[derive(Debug)]
pub struct SimulationState<R = ChaCha8Rng> {
    /// The configuration this run was built from.
    pub config: SimulationConfig,
    /// Day and tick position.
    pub clock: DayClock,
    /// All agents in roster order.
    pub roster: AgentRoster,
    /// Shared basket and field.
    pub environment: Environment,
    /// Counters for the current day.
    pub day_totals: DayTotals,
    /// Random source for forage rolls.
    pub rng: R,
}

impl SimulationState<ChaCha8Rng> {
    /// Build the initial state for `config`, seeding the random source from
    /// `config.simulation.seed`.
    ///
    /// The configuration is not validated here; see
    /// [`SimulationConfig::validate`].
    pub fn from_config(config: SimulationConfig) -> Result<Self, ClockError> {
        let rng = ChaCha8Rng::seed_from_u64(config.simulation.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> SimulationState<R> {
    /// Build the initial state for `config` with an explicit random source.
    pub fn with_rng(config: SimulationConfig, rng: R) -> Result<Self, ClockError> {
        let clock = DayClock::new(config.simulation.ticks_per_day)?;
        let roster = AgentRoster::spawn(config.simulation.agents, &config.vitals);
        let environment = Environment::new(config.world.initial_basket, config.world.initial_field);
        Ok(Self {
            config,
            clock,
            roster,
            environment,
            day_totals: DayTotals::default(),
            rng,
        })
    }
}

/// Execute one complete tick of the simulation.
///
/// The caller must have started a day on `state.clock`.
pub fn run_tick<R: Rng>(
    state: &mut SimulationState<R>,
    decision_source: &mut dyn DecisionSource,
) -> Result<TickSummary, TickError> {
    let tick = state.clock.advance()?;
    let day = state.clock.day();

    // --- Phase 1: Baseline ---
    for agent in state.roster.iter_mut() {
        vitals::apply_baseline(agent, &state.config.vitals);
    }

    // --- Phase 2: Decision ---
    let basket_before = state.environment.basket();
    let field_before = state.environment.field();
    let actions = decision_source.decide(&state.roster, basket_before)?;
    if actions.len() != state.roster.len() {
        return Err(DecisionError::WrongCount {
            expected: state.roster.len(),
            got: actions.len(),
        }
        .into());
    }

    // --- Phase 3: Odds ---
    let foragers = u32::try_from(actions.iter().filter(|a| **a == Action::Forage).count())
        .unwrap_or(u32::MAX);
    let success_probability = forage::success_probability(foragers, &state.config.forage);

    // --- Phase 4: Resolution ---
    let mut draws: u32 = 0;
    let mut gathered: u32 = 0;
    let mut eaten: u32 = 0;
    let mut idle_eaters: u32 = 0;

    for (agent, action) in state.roster.iter_mut().zip(&actions) {
        match action {
            Action::Eat => {
                if state.environment.take_from_basket() {
                    vitals::apply_eat(agent, &state.config.vitals);
                    eaten = eaten.saturating_add(1);
                } else {
                    idle_eaters = idle_eaters.saturating_add(1);
                }
            }
            Action::Rest => vitals::apply_rest(agent, &state.config.vitals),
            Action::Forage => {
                vitals::apply_forage(agent, &state.config.vitals);
                if state.environment.field_has_stock() {
                    draws = draws.saturating_add(1);
                    if forage::roll(&mut state.rng, success_probability)
                        && state.environment.harvest_one()
                    {
                        gathered = gathered.saturating_add(1);
                    }
                }
            }
        }
    }

    state.day_totals.gathered = state.day_totals.gathered.saturating_add(gathered);
    state.day_totals.eaten = state.day_totals.eaten.saturating_add(eaten);

    debug!(
        day,
        tick,
        basket_before,
        field_before,
        foragers,
        success_probability,
        draws,
        gathered,
        eaten,
        idle_eaters,
        basket = state.environment.basket(),
        field = state.environment.field(),
        "Tick complete"
    );

    Ok(TickSummary {
        day,
        tick,
        basket_before,
        field_before,
        actions,
        foragers,
        success_probability,
        draws,
        gathered,
        eaten,
        idle_eaters,
    })
}

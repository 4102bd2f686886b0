//! Rule-based action policy.
//!
//! The policy is a pure function of one agent's vitals, the basket count
//! observed at the start of the tick, and the population size. Rules are
//! checked in order and the first match wins:
//!
//! 1. Hungry (`hunger >= eat_hunger_threshold`) and the basket is not
//!    empty: **eat**.
//! 2. Basket is scarce (`basket <= max(1, agents / 2)`) and the agent has
//!    `energy >= forage_energy_floor`: **forage**.
//! 3. Tired (`energy < rest_energy_threshold`): **rest**.
//! 4. Otherwise: **forage**.

use serde::Deserialize;
use village_types::Action;

use crate::agent::Agent;

/// Thresholds used by [`choose_action`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Hunger at or above which an agent eats when food is available
    /// (default: 70).
    pub eat_hunger_threshold: u32,

    /// Minimum energy needed to forage when the basket is scarce
    /// (default: 25).
    pub forage_energy_floor: u32,

    /// Energy below which an agent rests (default: 30).
    pub rest_energy_threshold: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            eat_hunger_threshold: 70,
            forage_energy_floor: 25,
            rest_energy_threshold: 30,
        }
    }
}

/// Basket level at or below which food counts as scarce for a population
/// of `agent_count`: `max(1, agent_count / 2)`.
pub const fn scarcity_line(agent_count: u32) -> u32 {
    let half = agent_count / 2;
    if half > 1 { half } else { 1 }
}

/// Pick the action for `agent` given the tick's basket snapshot.
pub const fn choose_action(
    agent: &Agent,
    basket: u32,
    agent_count: u32,
    config: &PolicyConfig,
) -> Action {
    if agent.hunger() >= config.eat_hunger_threshold && basket > 0 {
        return Action::Eat;
    }
    if basket <= scarcity_line(agent_count) && agent.energy() >= config.forage_energy_floor {
        return Action::Forage;
    }
    if agent.energy() < config.rest_energy_threshold {
        return Action::Rest;
    }
    Action::Forage
}

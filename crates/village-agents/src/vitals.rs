//! Vital transitions applied to a single agent.
//!
//! Each function mutates only the acting agent and clamps both stats to
//! `0..=MAX_VITAL`, so no invalid state is representable and nothing here
//! can fail:
//!
//! | Transition | Hunger                | Energy                  |
//! |------------|-----------------------|-------------------------|
//! | baseline   | `+baseline_hunger`    | --                      |
//! | forage     | `+forage_hunger`      | `-forage_energy_cost`   |
//! | rest       | `+rest_hunger`        | `+rest_energy`          |
//! | eat        | `-eat_hunger_relief`  | `+eat_energy`           |

use crate::agent::Agent;
use crate::config::{MAX_VITAL, VitalsConfig};

/// Add `amount` to a vital, capping at [`MAX_VITAL`].
const fn raise(value: u32, amount: u32) -> u32 {
    let raised = value.saturating_add(amount);
    if raised > MAX_VITAL { MAX_VITAL } else { raised }
}

/// Subtract `amount` from a vital, flooring at 0.
const fn lower(value: u32, amount: u32) -> u32 {
    value.saturating_sub(amount)
}

/// Per-tick hunger drift, applied to every agent before any decision.
pub const fn apply_baseline(agent: &mut Agent, config: &VitalsConfig) {
    agent.hunger = raise(agent.hunger, config.baseline_hunger);
}

/// Pay the cost of a forage attempt. The cost is paid whether or not the
/// attempt finds anything.
pub const fn apply_forage(agent: &mut Agent, config: &VitalsConfig) {
    agent.energy = lower(agent.energy, config.forage_energy_cost);
    agent.hunger = raise(agent.hunger, config.forage_hunger);
}

/// Recover energy; resting still makes the agent slightly hungrier.
pub const fn apply_rest(agent: &mut Agent, config: &VitalsConfig) {
    agent.energy = raise(agent.energy, config.rest_energy);
    agent.hunger = raise(agent.hunger, config.rest_hunger);
}

/// Consume one unit of food. The caller is responsible for taking the unit
/// out of the basket first.
pub const fn apply_eat(agent: &mut Agent, config: &VitalsConfig) {
    agent.hunger = lower(agent.hunger, config.eat_hunger_relief);
    agent.energy = raise(agent.energy, config.eat_energy);
}

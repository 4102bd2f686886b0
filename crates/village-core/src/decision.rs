//! Decision source trait and its implementations.
//!
//! During the decision phase of a tick the engine asks a [`DecisionSource`]
//! for one [`Action`] per agent, in roster order. Every agent sees the same
//! basket snapshot, taken before anyone acts.
//!
//! - [`PolicyDecisionSource`] applies the rule-based policy from
//!   `village-agents`. This is what a normal run uses.
//! - [`ScriptedDecisionSource`] replays a fixed action list every tick, for
//!   exercising the tick executor with a chosen action mix.

use village_agents::{AgentRoster, PolicyConfig, choose_action};
use village_types::Action;

/// Errors that can occur during the decision phase.
#[derive(Debug, thiserror::Error)]
pub enum DecisionError {
    /// The source returned a different number of actions than agents.
    #[error("decision source returned {got} actions for {expected} agents")]
    WrongCount {
        /// Number of agents in the roster.
        expected: usize,
        /// Number of actions returned.
        got: usize,
    },
}

/// A source of agent decisions.
pub trait DecisionSource {
    /// Return one action per agent, in roster order.
    ///
    /// `basket` is the basket count observed before any agent acts this
    /// tick. Implementations must not assume it changes between agents.
    fn decide(&mut self, roster: &AgentRoster, basket: u32) -> Result<Vec<Action>, DecisionError>;
}

/// Decision source backed by the rule-based policy.
#[derive(Debug, Clone, Default)]
pub struct PolicyDecisionSource {
    config: PolicyConfig,
}

impl PolicyDecisionSource {
    /// Create a policy source with the given thresholds.
    pub const fn new(config: PolicyConfig) -> Self {
        Self { config }
    }
}

impl DecisionSource for PolicyDecisionSource {
    fn decide(&mut self, roster: &AgentRoster, basket: u32) -> Result<Vec<Action>, DecisionError> {
        let agent_count = roster.count();
        Ok(roster
            .iter()
            .map(|agent| choose_action(agent, basket, agent_count, &self.config))
            .collect())
    }
}

/// Decision source that returns the same action list every tick.
#[derive(Debug, Clone)]
pub struct ScriptedDecisionSource {
    actions: Vec<Action>,
}

impl ScriptedDecisionSource {
    /// Replay `actions` (one per agent, in roster order) every tick.
    pub const fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }
}

impl DecisionSource for ScriptedDecisionSource {
    fn decide(&mut self, roster: &AgentRoster, _basket: u32) -> Result<Vec<Action>, DecisionError> {
        if self.actions.len() != roster.len() {
            return Err(DecisionError::WrongCount {
                expected: roster.len(),
                got: self.actions.len(),
            });
        }
        Ok(self.actions.clone())
    }
}

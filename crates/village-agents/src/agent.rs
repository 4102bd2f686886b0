//! Agent records and the fixed-order roster.
//!
//! An [`Agent`] owns its two vital stats. The fields are private so the
//! only way to change them is through [`crate::vitals`], which clamps every
//! result to `0..=MAX_VITAL`.
//!
//! The [`AgentRoster`] creates all agents once at simulation start and
//! never adds or removes any. Its iteration order is the order used by
//! every phase of a tick.

use village_types::AgentId;

use crate::config::{MAX_VITAL, VitalsConfig};

/// A single forager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    id: AgentId,
    name: String,
    pub(crate) hunger: u32,
    pub(crate) energy: u32,
}

impl Agent {
    /// Create an agent with the given vitals, clamped to `0..=MAX_VITAL`.
    ///
    /// The name is derived from the id (`A0`, `A1`, ...).
    pub fn with_vitals(id: AgentId, hunger: u32, energy: u32) -> Self {
        Self {
            id,
            name: format!("A{id}"),
            hunger: hunger.min(MAX_VITAL),
            energy: energy.min(MAX_VITAL),
        }
    }

    /// Create an agent with the starting vitals from `config`.
    pub fn spawn(id: AgentId, config: &VitalsConfig) -> Self {
        Self::with_vitals(id, config.starting_hunger, config.starting_energy)
    }

    /// Roster position of this agent.
    pub const fn id(&self) -> AgentId {
        self.id
    }

    /// Stable display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current hunger (0 = sated, 100 = starving).
    pub const fn hunger(&self) -> u32 {
        self.hunger
    }

    /// Current energy (0 = exhausted, 100 = fully rested).
    pub const fn energy(&self) -> u32 {
        self.energy
    }

    /// Whether this agent's hunger is at or above `threshold`.
    pub const fn is_starving(&self, threshold: u32) -> bool {
        self.hunger >= threshold
    }
}

/// All agents of a run, in fixed roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentRoster {
    agents: Vec<Agent>,
}

impl AgentRoster {
    /// Create `count` agents with ids `0..count` and starting vitals from
    /// `config`.
    pub fn spawn(count: u32, config: &VitalsConfig) -> Self {
        let agents = (0..count)
            .map(|index| Agent::spawn(AgentId::new(index), config))
            .collect();
        Self { agents }
    }

    /// Build a roster from explicit agents, preserving their order.
    pub const fn from_agents(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    /// Number of agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the roster holds no agents.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Number of agents as `u32`, saturating.
    pub fn count(&self) -> u32 {
        u32::try_from(self.agents.len()).unwrap_or(u32::MAX)
    }

    /// Iterate agents in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    /// Iterate agents mutably in roster order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Agent> {
        self.agents.iter_mut()
    }

    /// Look up an agent by id.
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        usize::try_from(id.into_inner())
            .ok()
            .and_then(|index| self.agents.get(index))
    }

    /// Sum of hunger over all agents.
    pub fn total_hunger(&self) -> u64 {
        self.agents.iter().map(|a| u64::from(a.hunger)).sum()
    }

    /// Sum of energy over all agents.
    pub fn total_energy(&self) -> u64 {
        self.agents.iter().map(|a| u64::from(a.energy)).sum()
    }

    /// Number of agents with hunger at or above `threshold`.
    pub fn starving_count(&self, threshold: u32) -> u32 {
        let n = self
            .agents
            .iter()
            .filter(|a| a.is_starving(threshold))
            .count();
        u32::try_from(n).unwrap_or(u32::MAX)
    }
}

impl<'a> IntoIterator for &'a AgentRoster {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_assigns_sequential_names() {
        let roster = AgentRoster::spawn(3, &VitalsConfig::default());
        let names: Vec<&str> = roster.iter().map(Agent::name).collect();
        assert_eq!(names, vec!["A0", "A1", "A2"]);
    }

    #[test]
    fn spawn_uses_starting_vitals() {
        let roster = AgentRoster::spawn(2, &VitalsConfig::default());
        for agent in &roster {
            assert_eq!(agent.hunger(), 0);
            assert_eq!(agent.energy(), 100);
        }
        assert_eq!(roster.count(), 2);
    }

    #[test]
    fn with_vitals_clamps_out_of_range() {
        let agent = Agent::with_vitals(AgentId::new(0), 250, 101);
        assert_eq!(agent.hunger(), 100);
        assert_eq!(agent.energy(), 100);
    }

    #[test]
    fn totals_and_starving_count() {
        let roster = AgentRoster::from_agents(vec![
            Agent::with_vitals(AgentId::new(0), 95, 10),
            Agent::with_vitals(AgentId::new(1), 94, 20),
            Agent::with_vitals(AgentId::new(2), 100, 30),
        ]);
        assert_eq!(roster.total_hunger(), 289);
        assert_eq!(roster.total_energy(), 60);
        assert_eq!(roster.starving_count(95), 2);
    }

    #[test]
    fn get_by_id() {
        let roster = AgentRoster::spawn(2, &VitalsConfig::default());
        assert_eq!(roster.get(AgentId::new(1)).map(Agent::name), Some("A1"));
        assert!(roster.get(AgentId::new(5)).is_none());
    }
}

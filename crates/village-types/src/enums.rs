//! Enumeration types for the Gatherers' Village simulation.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Agent actions
// ---------------------------------------------------------------------------

/// An action an agent can choose during the decision phase of a tick.
///
/// The per-tick `baseline` hunger increase is not listed here: it is applied
/// unconditionally to every agent and is never chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Take one unit from the shared basket to reduce hunger.
    Eat,
    /// Spend energy searching the field for food.
    Forage,
    /// Recover energy.
    Rest,
}

impl Action {
    /// Lowercase label used in logs and reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eat => "eat",
            Self::Forage => "forage",
            Self::Rest => "rest",
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

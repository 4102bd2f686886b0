//! Agent state, vitals, and decision policy for the Gatherers' Village simulation.
//!
//! This crate contains the logic layer for agents -- everything that operates
//! on a single agent's state without touching the shared environment. It sits
//! between `village-types` (which defines the shared value types) and
//! `village-core` (which orchestrates ticks and days).
//!
//! # Modules
//!
//! - [`agent`] -- The [`Agent`] record and the fixed-order [`AgentRoster`]
//! - [`config`] -- Configurable parameters for vital mechanics ([`VitalsConfig`])
//! - [`policy`] -- The rule-based action policy ([`PolicyConfig`], [`choose_action`])
//! - [`vitals`] -- Per-action vital transitions (baseline, forage, rest, eat)

pub mod agent;
pub mod config;
pub mod policy;
pub mod vitals;

// Re-export primary types at crate root for convenience.
pub use agent::{Agent, AgentRoster};
pub use config::{MAX_VITAL, VitalsConfig};
pub use policy::{PolicyConfig, choose_action};

//! Day clock, tick cycle, and simulation loop for the Gatherers' Village simulation.
//!
//! This crate owns the per-tick phases (baseline, decision, odds,
//! resolution) and the day loop that wraps them with reporting and field
//! regeneration.
//!
//! # Modules
//!
//! - [`clock`] -- Day and tick counters ([`DayClock`]).
//! - [`config`] -- Configuration loading from `village-config.yaml` into
//!   strongly-typed structs, with validation.
//! - [`decision`] -- [`DecisionSource`] trait, the policy-backed source, and
//!   a scripted source.
//! - [`forage`] -- Forage success odds and the per-forager roll.
//! - [`report`] -- End-of-day [`DayReport`] assembly and encoding.
//! - [`runner`] -- The day loop.
//! - [`tick`] -- The per-tick engine and [`SimulationState`].
//!
//! [`DayClock`]: clock::DayClock
//! [`DecisionSource`]: decision::DecisionSource
//! [`DayReport`]: village_types::DayReport
//! [`SimulationState`]: tick::SimulationState

pub mod clock;
pub mod config;
pub mod decision;
pub mod forage;
pub mod report;
pub mod runner;
pub mod tick;

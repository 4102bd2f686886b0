//! Shared type definitions for the Gatherers' Village simulation.
//!
//! This crate is the single source of truth for the small value types that
//! flow between the agent, world, and core crates.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe identifier wrappers
//! - [`enums`] -- Enumeration types (agent actions)
//! - [`structs`] -- Report structs and fixed-point averages

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::Action;
pub use ids::AgentId;
pub use structs::{DayReport, Tenths};

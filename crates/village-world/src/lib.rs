//! Shared resources for the Gatherers' Village simulation.
//!
//! This crate models the village's physical stores: the basket of
//! harvested food that agents eat from, and the field of unharvested stock
//! that foragers draw down and that regrows once per day.
//!
//! # Modules
//!
//! - [`environment`] -- The [`Environment`] pool with its take, harvest,
//!   and regeneration rules.

pub mod environment;

// Re-export primary types at crate root.
pub use environment::Environment;

//! Plain data types shared by the Pasture simulation crates.
//!
//! Nothing in here knows how the simulation advances; the logic lives in
//! `pasture_core` and the engine in the root crate.

pub mod data;

pub use data::agent::{Agent, Position, Species};
pub use data::cell::ResourceCell;
pub use data::stats::{EcoEvent, PopulationSnapshot, PopulationStats, TickCounters};

//! Core data structures for the Pasture simulation.

pub mod agent;
pub mod cell;
pub mod stats;

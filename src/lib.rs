//! # Pasture
//!
//! A wolf/sheep/grass predator-prey simulation on a toroidal world.
//!
//! - [`model::world::World`] owns the ecosystem and advances it one tick at a time.
//! - [`app::App`] is the tick source: start/stop, reset, paced runs and the
//!   population history.

pub mod app;
pub mod model;

//! # Pasture Core
//!
//! Simulation logic for a wolf/sheep/grass ecosystem on a toroidal world.
//!
//! This crate contains the deterministic building blocks the engine is made of:
//! - A regrowing grass grid (the resource automaton)
//! - Shared agent behaviour plus per-species foraging
//! - Tick phases as free-standing systems (foraging, predation, cull, reproduction)
//! - Toroidal geometry helpers
//! - Configuration, metrics and structured logging
//!
//! ## Example
//!
//! ```
//! use pasture_core::config::AppConfig;
//! use pasture_core::grid::ResourceGrid;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let config = AppConfig::default();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut grid = ResourceGrid::from_config(&config);
//! grid.initialize(&mut rng, config.grass.initial_alive_chance);
//! grid.advance();
//! assert!(grid.count_alive() <= grid.size() * grid.size());
//! ```

/// Shared agent behaviour and species-specific foraging
pub mod agent;
/// Configuration management for simulation parameters
pub mod config;
/// The regrowing grass grid
pub mod grid;
/// Tick metrics and logging setup
pub mod metrics;
/// Read-only world views for renderers
pub mod snapshot;
/// Per-cell occupancy index
pub mod spatial_hash;
/// Tick phases (foraging, predation, lifecycle, stats)
pub mod systems;
/// Toroidal geometry
pub mod torus;

pub use agent::AgentLogic;
pub use grid::ResourceGrid;
pub use metrics::{init_logging, Metrics};
pub use pasture_data::{Agent, PopulationSnapshot, Position, ResourceCell, Species};

//! Agent behaviour shared by prey and predators, and the per-species
//! foraging strategy layered on top of it.
//!
//! The capability every animal has (random walk, metabolism, directed
//! steps, splitting energy on reproduction) lives in [`AgentLogic`]. What an
//! animal looks for is decided by [`Forager`], dispatched on [`Species`].

use crate::config::{AppConfig, SpeciesConfig};
use crate::grid::ResourceGrid;
use crate::torus;
use pasture_data::{Agent, Position, Species};
use rand::Rng;
use std::f64::consts::TAU;
use uuid::Uuid;

pub trait AgentLogic {
    /// One step of length `step` in a uniformly random direction.
    fn move_randomly<R: Rng>(&mut self, rng: &mut R, step: f64, extent: f64);
    /// One step of at most `step` toward `target`.
    ///
    /// Unlike [`AgentLogic::move_randomly`] the displacement is not always
    /// `step`: a target within reach is landed on exactly, so the agent
    /// moves only the remaining distance.
    fn move_toward(&mut self, target: Position, step: f64, extent: f64);
    fn lose_energy(&mut self, amount: i64);
    fn gain_energy(&mut self, amount: i64);
    /// Halves this agent's energy (flooring) and returns a child holding the
    /// same amount at `position`.
    fn split_offspring<R: Rng>(&mut self, position: Position, rng: &mut R) -> Agent;
}

impl AgentLogic for Agent {
    fn move_randomly<R: Rng>(&mut self, rng: &mut R, step: f64, extent: f64) {
        let heading = rng.gen_range(0.0..TAU);
        self.position = torus::displace(self.position, heading, step, extent);
    }

    fn move_toward(&mut self, target: Position, step: f64, extent: f64) {
        let (dx, dy) = torus::wrapped_offset(self.position, target, extent);
        if dx.hypot(dy) <= step {
            self.position = torus::wrap_position(target, extent);
            return;
        }
        let heading = dy.atan2(dx);
        self.position = torus::displace(self.position, heading, step, extent);
    }

    fn lose_energy(&mut self, amount: i64) {
        self.energy -= amount;
    }

    fn gain_energy(&mut self, amount: i64) {
        self.energy += amount;
    }

    fn split_offspring<R: Rng>(&mut self, position: Position, rng: &mut R) -> Agent {
        let half = self.energy.div_euclid(2);
        self.energy = half;
        spawn_agent(self.species, position, half, rng)
    }
}

/// Linear scan for the candidate nearest to `from` across the torus.
///
/// Ties keep the first candidate seen.
pub fn seek_nearest<I>(from: Position, candidates: I, extent: f64) -> Option<Position>
where
    I: IntoIterator<Item = Position>,
{
    let mut best: Option<(Position, f64)> = None;
    for candidate in candidates {
        let dist = torus::distance(from, candidate, extent);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((candidate, dist)),
        }
    }
    best.map(|(pos, _)| pos)
}

/// What a forager can see when choosing where to head.
pub struct ForageView<'a> {
    pub grid: &'a ResourceGrid,
    pub prey: &'a [Agent],
}

/// Species-specific choice of foraging target.
pub trait Forager {
    fn forage_target(&self, view: &ForageView<'_>) -> Option<Position>;
}

impl Forager for Agent {
    fn forage_target(&self, view: &ForageView<'_>) -> Option<Position> {
        let extent = view.grid.world_size();
        match self.species {
            Species::Prey => seek_nearest(self.position, view.grid.alive_centers(), extent),
            Species::Predator => {
                seek_nearest(self.position, view.prey.iter().map(|p| p.position), extent)
            }
        }
    }
}

#[must_use]
pub fn species_config(config: &AppConfig, species: Species) -> &SpeciesConfig {
    match species {
        Species::Prey => &config.prey,
        Species::Predator => &config.predator,
    }
}

/// Builds an agent with an id drawn from `rng`, so seeded runs stay reproducible.
pub fn spawn_agent<R: Rng>(
    species: Species,
    position: Position,
    energy: i64,
    rng: &mut R,
) -> Agent {
    let id = Uuid::from_u128(rng.gen::<u128>());
    Agent::new(id, species, position, energy)
}

#[must_use]
pub fn random_position<R: Rng>(rng: &mut R, extent: f64) -> Position {
    Position::new(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent))
}

/// A founder placed uniformly at random with energy drawn from the species range.
pub fn spawn_founder<R: Rng>(species: Species, config: &AppConfig, rng: &mut R) -> Agent {
    let position = random_position(rng, config.world.world_size);
    let cfg = species_config(config, species);
    let energy = rng.gen_range(cfg.energy_min..=cfg.energy_max);
    spawn_agent(species, position, energy, rng)
}

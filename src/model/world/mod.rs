use crate::model::config::AppConfig;
use pasture_core::grid::ResourceGrid;
use pasture_core::snapshot::WorldSnapshot;
use pasture_core::spatial_hash::SpatialHash;
use pasture_core::systems::foraging::PhaseParams;
use pasture_data::{Agent, EcoEvent, PopulationSnapshot, PopulationStats, Species};
use rand_chacha::ChaCha8Rng;

pub mod finalize;
pub mod init;
pub mod update;

/// The whole ecosystem: grass grid, both populations, tick counter and RNG.
///
/// `World` owns every piece of mutable state. Hosts drive it with
/// [`World::step`] and observe it through the read-only accessors or an
/// owned [`WorldSnapshot`].
pub struct World {
    pub tick: u64,
    pub config: AppConfig,
    grid: ResourceGrid,
    prey: Vec<Agent>,
    predators: Vec<Agent>,
    pub rng: ChaCha8Rng,
    pub pop_stats: PopulationStats,
    spatial_hash: SpatialHash,
    events: Vec<EcoEvent>,
    last_snapshot: PopulationSnapshot,
    prey_params: PhaseParams,
    predator_params: PhaseParams,
}

impl World {
    #[must_use]
    pub fn grid(&self) -> &ResourceGrid {
        &self.grid
    }

    #[must_use]
    pub fn prey(&self) -> &[Agent] {
        &self.prey
    }

    #[must_use]
    pub fn predators(&self) -> &[Agent] {
        &self.predators
    }

    /// Counts as of the most recent tick (or of initialisation).
    #[must_use]
    pub fn last_snapshot(&self) -> PopulationSnapshot {
        self.last_snapshot
    }

    /// Events raised by the most recent `step()` or `reset()`.
    #[must_use]
    pub fn events(&self) -> &[EcoEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<EcoEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::capture(&self.grid, &self.prey, &self.predators, self.last_snapshot)
    }

    /// Mutable grid access for scenario setup.
    pub fn grid_mut(&mut self) -> &mut ResourceGrid {
        &mut self.grid
    }

    /// Mutable population access for scenario setup.
    ///
    /// The caller is responsible for keeping positions inside the world.
    pub fn population_mut(&mut self, species: Species) -> &mut Vec<Agent> {
        match species {
            Species::Prey => &mut self.prey,
            Species::Predator => &mut self.predators,
        }
    }

    /// Recomputes the cached counts after scenario edits.
    pub fn refresh_snapshot(&mut self) {
        self.last_snapshot = self.count_populations();
    }
}

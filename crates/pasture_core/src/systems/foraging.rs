//! Movement, metabolism and grazing for each population in turn.

use crate::agent::{species_config, AgentLogic, ForageView, Forager};
use crate::config::AppConfig;
use crate::grid::ResourceGrid;
use pasture_data::{Agent, Species};
use rand::Rng;

/// Per-species parameters for one movement phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseParams {
    /// Length of the random step (one cell).
    pub step: f64,
    /// Length of the directed step toward food.
    pub seek_step: f64,
    pub extent: f64,
    pub energy_loss: i64,
    pub energy_gain: i64,
    pub seeks: bool,
}

impl PhaseParams {
    #[must_use]
    pub fn for_species(config: &AppConfig, species: Species) -> Self {
        let cfg = species_config(config, species);
        let step = config.cell_size();
        Self {
            step,
            seek_step: step * config.world.movement_multiplier,
            extent: config.world.world_size,
            energy_loss: config.world.energy_loss_per_tick,
            energy_gain: cfg.energy_gain,
            seeks: cfg.seeks,
        }
    }
}

/// Moves every prey, charges its metabolism and lets it graze the cell it
/// ends up on. Returns the number of cells eaten.
///
/// Prey are processed in order, so a later prey sees the cells earlier prey
/// have already eaten.
pub fn prey_phase<R: Rng>(
    prey: &mut [Agent],
    grid: &mut ResourceGrid,
    params: &PhaseParams,
    rng: &mut R,
) -> u64 {
    let mut eaten = 0;
    for sheep in prey.iter_mut() {
        sheep.move_randomly(rng, params.step, params.extent);
        if params.seeks {
            let view = ForageView {
                grid: &*grid,
                prey: &[],
            };
            if let Some(target) = sheep.forage_target(&view) {
                sheep.move_toward(target, params.seek_step, params.extent);
            }
        }
        sheep.lose_energy(params.energy_loss);

        let (i, j) = grid.cell_index_of(sheep.position);
        if grid.is_alive(i, j) {
            grid.consume(i, j);
            sheep.gain_energy(params.energy_gain);
            eaten += 1;
        }
    }
    tracing::trace!(eaten, "Prey phase complete");
    eaten
}

/// Moves every predator and charges its metabolism. Eating happens later,
/// in [`crate::systems::predation::resolve_predation`].
pub fn predator_phase<R: Rng>(
    predators: &mut [Agent],
    prey: &[Agent],
    grid: &ResourceGrid,
    params: &PhaseParams,
    rng: &mut R,
) {
    let view = ForageView { grid, prey };
    for wolf in predators.iter_mut() {
        wolf.move_randomly(rng, params.step, params.extent);
        if params.seeks {
            if let Some(target) = wolf.forage_target(&view) {
                wolf.move_toward(target, params.seek_step, params.extent);
            }
        }
        wolf.lose_energy(params.energy_loss);
    }
}

use crate::model::world::World;
use pasture_core::systems::foraging::{predator_phase, prey_phase};
use pasture_core::systems::lifecycle::{cull_starved, reproduce};
use pasture_core::systems::predation::{resolve_predation, PredationContext};
use pasture_data::{PopulationSnapshot, TickCounters};

impl World {
    /// Advances the simulation by one tick.
    ///
    /// Phases run in a fixed order:
    /// 1. grass regrowth
    /// 2. prey move, pay metabolism and graze
    /// 3. predators move and pay metabolism
    /// 4. predation, batched so each prey dies at most once
    /// 5. starvation cull
    /// 6. reproduction over the survivors
    ///
    /// Returns the population counts after the tick.
    pub fn step(&mut self) -> PopulationSnapshot {
        let previous = self.last_snapshot;
        self.tick += 1;
        self.events.clear();
        let mut counters = TickCounters::default();

        let regrown = self.grid.advance();

        counters.grass_eaten = prey_phase(
            &mut self.prey,
            &mut self.grid,
            &self.prey_params,
            &mut self.rng,
        );
        // With `predator.seeks` off, predators only wander here and all
        // eating is left to the predation phase below.
        predator_phase(
            &mut self.predators,
            &self.prey,
            &self.grid,
            &self.predator_params,
            &mut self.rng,
        );

        counters.prey_eaten = resolve_predation(PredationContext {
            predators: &mut self.predators,
            prey: &mut self.prey,
            grid: &self.grid,
            index: &mut self.spatial_hash,
            energy_gain: self.predator_params.energy_gain,
            rng: &mut self.rng,
        });

        counters.prey_starved = cull_starved(&mut self.prey);
        counters.predators_starved = cull_starved(&mut self.predators);

        let extent = self.config.world.world_size;
        counters.prey_born = reproduce(
            &mut self.prey,
            self.config.prey.reproduction_chance,
            extent,
            &mut self.rng,
        );
        counters.predators_born = reproduce(
            &mut self.predators,
            self.config.predator.reproduction_chance,
            extent,
            &mut self.rng,
        );

        tracing::trace!(tick = self.tick, regrown, ?counters, "Tick phases complete");
        self.finalize_tick(previous, counters)
    }

    /// Runs `ticks` steps and returns the last snapshot.
    pub fn step_n(&mut self, ticks: u64) -> PopulationSnapshot {
        for _ in 0..ticks {
            self.step();
        }
        self.last_snapshot
    }
}

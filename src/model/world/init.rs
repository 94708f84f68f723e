use crate::model::config::AppConfig;
use crate::model::world::World;
use pasture_core::agent::spawn_founder;
use pasture_core::grid::ResourceGrid;
use pasture_core::spatial_hash::SpatialHash;
use pasture_core::systems::foraging::PhaseParams;
use pasture_data::{Agent, EcoEvent, PopulationSnapshot, PopulationStats, Species};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng_for(config: &AppConfig) -> ChaCha8Rng {
    if let Some(seed) = config.world.seed {
        ChaCha8Rng::seed_from_u64(seed)
    } else {
        ChaCha8Rng::from_entropy()
    }
}

impl World {
    /// Validates `config` and builds the initial ecosystem.
    ///
    /// The grid is randomised first, then prey founders, then predator
    /// founders, all from the one seeded RNG.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let mut rng = rng_for(&config);
        let (grid, prey, predators) = Self::populate(&config, &mut rng);

        let mut world = Self {
            tick: 0,
            grid,
            prey,
            predators,
            rng,
            pop_stats: PopulationStats::default(),
            spatial_hash: SpatialHash::new(),
            events: Vec::new(),
            last_snapshot: PopulationSnapshot::default(),
            prey_params: PhaseParams::for_species(&config, Species::Prey),
            predator_params: PhaseParams::for_species(&config, Species::Predator),
            config,
        };
        world.refresh_snapshot();
        tracing::info!(
            fingerprint = %world.config.fingerprint(),
            seed = ?world.config.world.seed,
            sheep = world.prey.len(),
            wolves = world.predators.len(),
            grass = world.last_snapshot.grass,
            "World created"
        );
        Ok(world)
    }

    /// Rebuilds grid and populations from the configuration, reseeding the
    /// RNG and discarding stats. The tick counter returns to zero.
    pub fn reset(&mut self) {
        let previous_tick = self.tick;
        self.rng = rng_for(&self.config);
        let (grid, prey, predators) = Self::populate(&self.config, &mut self.rng);
        self.grid = grid;
        self.prey = prey;
        self.predators = predators;
        self.tick = 0;
        self.pop_stats = PopulationStats::default();
        self.spatial_hash.clear();
        self.refresh_snapshot();
        self.events.clear();
        self.events.push(EcoEvent::Reset {
            tick: previous_tick,
        });
        tracing::info!(previous_tick, "World reset");
    }

    fn populate(
        config: &AppConfig,
        rng: &mut ChaCha8Rng,
    ) -> (ResourceGrid, Vec<Agent>, Vec<Agent>) {
        let mut grid = ResourceGrid::from_config(config);
        grid.initialize(rng, config.grass.initial_alive_chance);
        let prey = (0..config.prey.initial_count)
            .map(|_| spawn_founder(Species::Prey, config, rng))
            .collect();
        let predators = (0..config.predator.initial_count)
            .map(|_| spawn_founder(Species::Predator, config, rng))
            .collect();
        (grid, prey, predators)
    }
}

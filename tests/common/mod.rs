pub mod macros;

use pasture_data::{Agent, Position, ResourceCell, Species};
use pasture_lib::model::config::AppConfig;
use pasture_lib::model::world::World;
use uuid::Uuid;

type GridMod = Box<dyn FnOnce(&mut World)>;

/// Builds worlds for scenario tests. Starts from the default configuration
/// with no founders and no reproduction, so only what a test adds is present.
#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    agents: Vec<Agent>,
    grid_mods: Vec<GridMod>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.seed = Some(0);
        config.prey.initial_count = 0;
        config.predator.initial_count = 0;
        config.prey.reproduction_chance = 0.0;
        config.predator.reproduction_chance = 0.0;
        Self {
            config,
            agents: Vec::new(),
            grid_mods: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// `size × size` cells over a world of side `world_size`.
    pub fn with_grid(mut self, size: usize, world_size: f64, regrowth_ticks: u32) -> Self {
        self.config.world.grid_size = size;
        self.config.world.world_size = world_size;
        self.config.grass.regrowth_ticks = regrowth_ticks;
        self
    }

    /// Every cell alive (`true`) or freshly eaten (`false`).
    pub fn with_grass_everywhere(mut self, alive: bool) -> Self {
        self.grid_mods
            .push(Box::new(move |world| world.grid_mut().fill(alive)));
        self
    }

    pub fn with_alive_cell(mut self, i: usize, j: usize) -> Self {
        self.grid_mods.push(Box::new(move |world| {
            world.grid_mut().set_cell(i, j, ResourceCell::alive())
        }));
        self
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn with_prey(self, x: f64, y: f64, energy: i64) -> Self {
        self.with_agent(agent(Species::Prey, x, y, energy))
    }

    pub fn with_predator(self, x: f64, y: f64, energy: i64) -> Self {
        self.with_agent(agent(Species::Predator, x, y, energy))
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config).expect("Failed to create world in test builder");
        for modifier in self.grid_mods {
            modifier(&mut world);
        }
        for a in self.agents {
            world.population_mut(a.species).push(a);
        }
        world.refresh_snapshot();
        world
    }
}

#[allow(dead_code)]
pub fn agent(species: Species, x: f64, y: f64, energy: i64) -> Agent {
    Agent::new(Uuid::new_v4(), species, Position::new(x, y), energy)
}

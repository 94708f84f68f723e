use crate::grid::ResourceGrid;
use pasture_data::{Agent, PopulationSnapshot, Species};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AgentSnapshot {
    pub id: Uuid,
    pub species: Species,
    pub x: f64,
    pub y: f64,
    pub energy: i64,
}

impl From<&Agent> for AgentSnapshot {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id,
            species: agent.species,
            x: agent.position.x,
            y: agent.position.y,
            energy: agent.energy,
        }
    }
}

/// Owned copy of everything a renderer draws for one tick.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub grid_size: usize,
    pub world_size: f64,
    /// Row-major alive mask, same layout as [`ResourceGrid::cells`].
    pub alive: Vec<bool>,
    pub agents: Vec<AgentSnapshot>,
    pub population: PopulationSnapshot,
}

impl WorldSnapshot {
    #[must_use]
    pub fn capture(
        grid: &ResourceGrid,
        prey: &[Agent],
        predators: &[Agent],
        population: PopulationSnapshot,
    ) -> Self {
        Self {
            tick: population.tick,
            grid_size: grid.size(),
            world_size: grid.world_size(),
            alive: grid.cells().iter().map(|c| c.alive).collect(),
            agents: prey
                .iter()
                .chain(predators)
                .map(AgentSnapshot::from)
                .collect(),
            population,
        }
    }

    pub fn agents_of(&self, species: Species) -> impl Iterator<Item = &AgentSnapshot> {
        self.agents.iter().filter(move |a| a.species == species)
    }
}

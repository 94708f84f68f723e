use crate::grid::ResourceGrid;
use pasture_data::{Agent, EcoEvent, PopulationSnapshot, Species};

pub struct StatsContext<'a> {
    pub tick: u64,
    pub prey: &'a [Agent],
    pub predators: &'a [Agent],
    pub grid: &'a ResourceGrid,
}

#[must_use]
pub fn population_snapshot(ctx: StatsContext<'_>) -> PopulationSnapshot {
    PopulationSnapshot {
        tick: ctx.tick,
        prey: ctx.prey.len(),
        predators: ctx.predators.len(),
        grass: ctx.grid.grass_count(),
    }
}

/// Species that were present in `previous` and are gone in `current`.
#[must_use]
pub fn detect_extinctions(
    previous: &PopulationSnapshot,
    current: &PopulationSnapshot,
) -> Vec<EcoEvent> {
    [Species::Prey, Species::Predator]
        .into_iter()
        .filter(|&s| previous.count_of(s) > 0 && current.count_of(s) == 0)
        .map(|species| EcoEvent::Extinction {
            species,
            tick: current.tick,
        })
        .collect()
}

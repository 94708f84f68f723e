use crate::model::world::World;
use pasture_core::systems::stats::{detect_extinctions, population_snapshot, StatsContext};
use pasture_data::{EcoEvent, PopulationSnapshot, TickCounters};

impl World {
    pub(crate) fn count_populations(&self) -> PopulationSnapshot {
        population_snapshot(StatsContext {
            tick: self.tick,
            prey: &self.prey,
            predators: &self.predators,
            grid: &self.grid,
        })
    }

    pub(crate) fn finalize_tick(
        &mut self,
        previous: PopulationSnapshot,
        counters: TickCounters,
    ) -> PopulationSnapshot {
        let snapshot = self.count_populations();
        self.pop_stats.record(counters, &snapshot);

        for event in detect_extinctions(&previous, &snapshot) {
            if let EcoEvent::Extinction { species, tick } = &event {
                tracing::info!(%species, tick, "Population went extinct");
            }
            self.events.push(event);
        }

        tracing::debug!(
            tick = snapshot.tick,
            sheep = snapshot.prey,
            wolves = snapshot.predators,
            grass = snapshot.grass,
            grazed = counters.grass_eaten,
            hunted = counters.prey_eaten,
            "Tick finished"
        );
        self.last_snapshot = snapshot;
        snapshot
    }
}

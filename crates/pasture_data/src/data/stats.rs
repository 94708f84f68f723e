use super::agent::Species;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;

/// Population counts reported to observers after every tick.
///
/// `grass` is the number of living cells divided by four. The divisor is a
/// display convention kept for output compatibility, not a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    pub tick: u64,
    pub prey: usize,
    pub predators: usize,
    pub grass: usize,
}

impl PopulationSnapshot {
    #[must_use]
    pub fn count_of(&self, species: Species) -> usize {
        match species {
            Species::Prey => self.prey,
            Species::Predator => self.predators,
        }
    }

    /// CSV row in `tick,sheep,wolves,grass` order.
    #[must_use]
    pub fn to_csv_row(&self) -> String {
        format!("{},{},{},{}", self.tick, self.prey, self.predators, self.grass)
    }
}

impl fmt::Display for PopulationSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sheep: {}  Wolves: {}  Grass: {}",
            self.prey, self.predators, self.grass
        )
    }
}

/// What happened during one tick (or, summed, over a run).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickCounters {
    pub grass_eaten: u64,
    pub prey_eaten: u64,
    pub prey_starved: u64,
    pub predators_starved: u64,
    pub prey_born: u64,
    pub predators_born: u64,
}

impl AddAssign for TickCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.grass_eaten += rhs.grass_eaten;
        self.prey_eaten += rhs.prey_eaten;
        self.prey_starved += rhs.prey_starved;
        self.predators_starved += rhs.predators_starved;
        self.prey_born += rhs.prey_born;
        self.predators_born += rhs.predators_born;
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopulationStats {
    /// Counters for the most recent tick only.
    pub last_tick: TickCounters,
    /// Counters accumulated since the last reset.
    pub totals: TickCounters,
    pub peak_prey: usize,
    pub peak_predators: usize,
}

impl PopulationStats {
    pub fn record(&mut self, counters: TickCounters, snapshot: &PopulationSnapshot) {
        self.last_tick = counters;
        self.totals += counters;
        self.peak_prey = self.peak_prey.max(snapshot.prey);
        self.peak_predators = self.peak_predators.max(snapshot.predators);
    }
}

/// Notable transitions surfaced to the host alongside the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum EcoEvent {
    Extinction { species: Species, tick: u64 },
    Reset { tick: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_display_matches_status_box() {
        let snap = PopulationSnapshot {
            tick: 3,
            prey: 12,
            predators: 4,
            grass: 600,
        };
        assert_eq!(snap.to_string(), "Sheep: 12  Wolves: 4  Grass: 600");
        assert_eq!(snap.to_csv_row(), "3,12,4,600");
    }

    #[test]
    fn test_stats_accumulate() {
        let mut stats = PopulationStats::default();
        let snap = PopulationSnapshot {
            tick: 1,
            prey: 10,
            predators: 2,
            grass: 5,
        };
        let counters = TickCounters {
            grass_eaten: 3,
            prey_eaten: 1,
            ..Default::default()
        };
        stats.record(counters, &snap);
        stats.record(counters, &PopulationSnapshot { prey: 4, ..snap });
        assert_eq!(stats.totals.grass_eaten, 6);
        assert_eq!(stats.last_tick.prey_eaten, 1);
        assert_eq!(stats.peak_prey, 10);
    }

    #[test]
    fn test_event_tagged_json() {
        let ev = EcoEvent::Extinction {
            species: Species::Predator,
            tick: 9,
        };
        let json = serde_json::to_string(&ev).unwrap();
        assert!(json.contains("\"event\":\"Extinction\""));
    }
}

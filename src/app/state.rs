use anyhow::Result;
use std::path::PathBuf;
use std::time::Instant;

use crate::app::ShutdownManager;
use crate::model::config::AppConfig;
use crate::model::history::{HistoryLogger, PopulationHistory};
use crate::model::world::World;
use pasture_core::Metrics;
use pasture_data::{EcoEvent, PopulationSnapshot};

/// Host for one world: the start/stop switch, the reset button and the
/// population history behind the chart.
pub struct App {
    pub running: bool,
    pub world: World,
    pub history: PopulationHistory,
    pub metrics: Metrics,
    pub shutdown: ShutdownManager,
    /// Where `save_state` writes the gzip history archive, if anywhere.
    pub archive_path: Option<PathBuf>,
    logger: HistoryLogger,
}

impl App {
    /// Builds a running app around a fresh world. Nothing is written to disk
    /// until a logger or archive path is attached.
    pub fn new(config: AppConfig) -> Result<Self> {
        let metrics = Metrics::new(config.log_interval);
        let world = World::new(config)?;
        Ok(Self {
            running: true,
            world,
            history: PopulationHistory::new(),
            metrics,
            shutdown: ShutdownManager::new(),
            archive_path: None,
            logger: HistoryLogger::new_dummy(),
        })
    }

    #[must_use]
    pub fn with_logger(mut self, logger: HistoryLogger) -> Self {
        self.logger = logger;
        self
    }

    #[must_use]
    pub fn with_archive(mut self, path: impl Into<PathBuf>) -> Self {
        self.archive_path = Some(path.into());
        self
    }

    /// Flips between running and stopped. Returns the new state.
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        tracing::info!(running = self.running, tick = self.world.tick, "Toggled simulation");
        self.running
    }

    /// Stops the simulation, clears the history and rebuilds the world.
    pub fn reset(&mut self) -> Result<()> {
        self.running = false;
        self.history.clear();
        self.world.reset();
        for event in self.world.take_events() {
            self.logger.log_event(&event)?;
        }
        self.metrics.increment_counter("resets");
        Ok(())
    }

    /// Advances one tick and records it everywhere.
    pub fn tick(&mut self) -> Result<PopulationSnapshot> {
        let start = Instant::now();
        let snapshot = self.world.step();
        self.metrics.record_tick(start.elapsed(), &snapshot);

        let counters = self.world.pop_stats.last_tick;
        self.metrics.add_to_counter("births", counters.prey_born + counters.predators_born);
        self.metrics.add_to_counter(
            "deaths",
            counters.prey_eaten + counters.prey_starved + counters.predators_starved,
        );

        self.history.push(snapshot);
        self.logger.log_snapshot(&snapshot)?;
        for event in self.world.take_events() {
            if let EcoEvent::Extinction { species, tick } = &event {
                self.metrics
                    .log_event("extinction", &format!("{species} at tick {tick}"));
            }
            self.logger.log_event(&event)?;
        }
        Ok(snapshot)
    }

    /// Runs `ticks` ticks back to back, ignoring the running flag.
    pub fn run_for(&mut self, ticks: u64) -> Result<PopulationSnapshot> {
        let mut last = self.world.last_snapshot();
        for _ in 0..ticks {
            last = self.tick()?;
        }
        Ok(last)
    }

    /// Archives the history to `archive_path`, if one is set.
    pub fn save_state(&self) -> Result<()> {
        if let Some(path) = &self.archive_path {
            self.history
                .save_archive(path, &self.world.config.fingerprint())?;
            tracing::info!(path = %path.display(), samples = self.history.len(), "Saved history archive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(seed: u64) -> App {
        let mut config = AppConfig::default();
        config.world.seed = Some(seed);
        App::new(config).expect("Failed to create app")
    }

    #[test]
    fn test_toggle_running() {
        let mut app = app(1);
        assert!(app.running);
        assert!(!app.toggle_running());
        assert!(app.toggle_running());
    }

    #[test]
    fn test_run_for_records_history() {
        let mut app = app(2);
        let last = app.run_for(5).unwrap();
        assert_eq!(app.history.len(), 5);
        assert_eq!(app.history.latest(), Some(&last));
        assert_eq!(app.metrics.tick_count(), 5);
    }

    #[test]
    fn test_reset_stops_and_clears() {
        let mut app = app(3);
        app.run_for(3).unwrap();
        app.reset().unwrap();
        assert!(!app.running);
        assert!(app.history.is_empty());
        assert_eq!(app.world.tick, 0);
        assert_eq!(app.world.prey().len(), 100);
        assert_eq!(app.metrics.counter("resets"), 1);
    }
}

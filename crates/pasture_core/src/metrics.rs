//! Tick metrics and logging setup for the simulation.
//!
//! Provides structured logging and counters for monitoring population
//! dynamics and tick throughput.

use pasture_data::PopulationSnapshot;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Metrics collector shared between the engine host and observers.
pub struct Metrics {
    tick_count: AtomicU64,
    prey_count: AtomicU64,
    predator_count: AtomicU64,
    grass_count: AtomicU64,
    busy_nanos: AtomicU64,
    log_interval: u64,
    pub counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Metrics {
    /// Creates a collector that logs a summary every `log_interval` ticks.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            prey_count: AtomicU64::new(0),
            predator_count: AtomicU64::new(0),
            grass_count: AtomicU64::new(0),
            busy_nanos: AtomicU64::new(0),
            log_interval: log_interval.max(1),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, snapshot: &PopulationSnapshot) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.prey_count.store(snapshot.prey as u64, Ordering::Relaxed);
        self.predator_count
            .store(snapshot.predators as u64, Ordering::Relaxed);
        self.grass_count.store(snapshot.grass as u64, Ordering::Relaxed);
        self.busy_nanos
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);

        if tick % self.log_interval == 0 {
            tracing::info!(
                tick = snapshot.tick,
                sheep = snapshot.prey,
                wolves = snapshot.predators,
                grass = snapshot.grass,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    /// Increments a named counter by `amount`.
    pub fn add_to_counter(&self, name: &str, amount: u64) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(amount, Ordering::Relaxed);
    }

    pub fn increment_counter(&self, name: &str) {
        self.add_to_counter(name, 1);
    }

    /// Current value of a named counter, zero if it was never touched.
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    /// Population counts from the most recent tick as `(sheep, wolves, grass)`.
    #[must_use]
    pub fn populations(&self) -> (u64, u64, u64) {
        (
            self.prey_count.load(Ordering::Relaxed),
            self.predator_count.load(Ordering::Relaxed),
            self.grass_count.load(Ordering::Relaxed),
        )
    }

    /// Mean time spent inside `step()`.
    #[must_use]
    pub fn mean_tick_duration(&self) -> Duration {
        let ticks = self.tick_count();
        if ticks == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos(self.busy_nanos.load(Ordering::Relaxed) / ticks)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs a simulation event.
    pub fn log_event(&self, event_type: &str, details: &str) {
        tracing::info!(
            event_type = event_type,
            details = details,
            "Simulation event"
        );
    }
}

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `default_level` (e.g. `"info"` or `"pasture=debug"`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();
}

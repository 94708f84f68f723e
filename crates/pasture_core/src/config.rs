//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every parameter is fixed once a world is built.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults; missing sections fall back)
//! 3. Command-line overrides applied by the binary (`--seed`)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! grid_size = 50
//! world_size = 800.0
//! seed = 42
//!
//! [grass]
//! regrowth_ticks = 30
//!
//! [predator]
//! initial_count = 50
//! energy_min = 0
//! energy_max = 40
//! energy_gain = 20
//! reproduction_chance = 0.05
//! seeks = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// World geometry and shared agent parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Number of grass cells along each side of the square grid.
    pub grid_size: usize,
    /// Side length of the continuous toroidal world.
    pub world_size: f64,
    /// RNG seed. `None` draws fresh entropy on every build or reset.
    pub seed: Option<u64>,
    /// Scales the directed foraging step relative to one cell.
    pub movement_multiplier: f64,
    /// Energy every agent loses per tick.
    pub energy_loss_per_tick: i64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            grid_size: 50,
            world_size: 800.0,
            seed: None,
            movement_multiplier: 1.0,
            energy_loss_per_tick: 1,
        }
    }
}

/// Grass regrowth automaton.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GrassConfig {
    /// Dormant ticks before a consumed cell becomes alive again.
    pub regrowth_ticks: u32,
    /// Probability a cell starts alive.
    pub initial_alive_chance: f64,
}

impl Default for GrassConfig {
    fn default() -> Self {
        Self {
            regrowth_ticks: 30,
            initial_alive_chance: 0.5,
        }
    }
}

/// Per-species population and energy parameters.
///
/// A species section in TOML must be complete; an absent section takes the
/// species' own defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpeciesConfig {
    pub initial_count: usize,
    /// Lower bound (inclusive) of a founder's starting energy.
    pub energy_min: i64,
    /// Upper bound (inclusive) of a founder's starting energy.
    pub energy_max: i64,
    /// Energy gained per meal.
    pub energy_gain: i64,
    /// Chance per tick that a surviving adult reproduces.
    pub reproduction_chance: f64,
    /// Whether the species walks toward its nearest food after its random step.
    pub seeks: bool,
}

impl SpeciesConfig {
    #[must_use]
    pub fn prey() -> Self {
        Self {
            initial_count: 100,
            energy_min: 0,
            energy_max: 8,
            energy_gain: 4,
            reproduction_chance: 0.04,
            seeks: true,
        }
    }

    #[must_use]
    pub fn predator() -> Self {
        Self {
            initial_count: 50,
            energy_min: 0,
            energy_max: 40,
            energy_gain: 20,
            reproduction_chance: 0.05,
            seeks: true,
        }
    }

    fn validate(&self, label: &str) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.initial_count <= 100_000,
            "{label} initial count too large (max 100000)"
        );
        anyhow::ensure!(
            self.energy_min <= self.energy_max,
            "{label} energy_min must not exceed energy_max"
        );
        anyhow::ensure!(
            self.energy_gain >= 0,
            "{label} energy gain must be non-negative"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.reproduction_chance),
            "{label} reproduction chance must be in [0.0, 1.0]"
        );
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub grass: GrassConfig,
    pub prey: SpeciesConfig,
    pub predator: SpeciesConfig,
    /// Ticks per second for the paced run loop.
    pub target_tps: u64,
    /// Emit an info-level tick summary every this many ticks.
    pub log_interval: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            grass: GrassConfig::default(),
            prey: SpeciesConfig::prey(),
            predator: SpeciesConfig::predator(),
            target_tps: 100,
            log_interval: 100,
        }
    }
}

impl AppConfig {
    /// Side length of one grass cell in world units.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.world.world_size / self.world.grid_size as f64
    }

    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    ///
    /// # Validation Rules
    /// - Grid size must be positive and reasonable (<= 1000)
    /// - World size must be finite and positive
    /// - Regrowth threshold must be at least one tick
    /// - Probabilities must lie in [0.0, 1.0]
    /// - Founder energy ranges must be ordered
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.world.grid_size > 0, "Grid size must be positive");
        anyhow::ensure!(
            self.world.grid_size <= 1000,
            "Grid size too large (max 1000)"
        );
        anyhow::ensure!(
            self.world.world_size.is_finite() && self.world.world_size > 0.0,
            "World size must be finite and positive"
        );
        anyhow::ensure!(
            self.world.movement_multiplier.is_finite() && self.world.movement_multiplier >= 0.0,
            "Movement multiplier must be non-negative"
        );
        anyhow::ensure!(
            self.world.energy_loss_per_tick >= 0,
            "Energy loss per tick must be non-negative"
        );

        anyhow::ensure!(
            self.grass.regrowth_ticks > 0,
            "Grass regrowth ticks must be positive"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.grass.initial_alive_chance),
            "Initial alive chance must be in [0.0, 1.0]"
        );

        self.prey.validate("Prey")?;
        self.predator.validate("Predator")?;

        anyhow::ensure!(self.target_tps > 0, "Target TPS must be positive");
        anyhow::ensure!(self.target_tps <= 10_000, "Target TPS too high (max 10000)");
        anyhow::ensure!(self.log_interval > 0, "Log interval must be positive");

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    ///
    /// A file that exists but fails to parse or validate is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)
            .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Hash of the parameters that shape the dynamics (seed and pacing excluded).
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{}:{}", self.world.grid_size, self.world.world_size).as_bytes());
        hasher.update(
            format!(
                "{}:{}",
                self.world.movement_multiplier, self.world.energy_loss_per_tick
            )
            .as_bytes(),
        );
        hasher.update(format!("{:?}", self.grass).as_bytes());
        hasher.update(format!("{:?}", self.prey).as_bytes());
        hasher.update(format!("{:?}", self.predator).as_bytes());
        hex::encode(hasher.finalize())
    }
}

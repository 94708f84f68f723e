use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Which side of the food chain an agent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Grazes on grass ("sheep").
    Prey,
    /// Hunts prey ("wolves").
    Predator,
}

impl Species {
    /// Name used in the original status readout.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Species::Prey => "Sheep",
            Species::Predator => "Wolves",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Continuous world position. Always kept inside `[0, world_size)` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A living animal.
///
/// Energy is an integer, as halving on reproduction floors. It may dip below
/// zero inside a tick; the end-of-tick cull removes such agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: Uuid,
    pub species: Species,
    pub position: Position,
    pub energy: i64,
}

impl Agent {
    #[must_use]
    pub fn new(id: Uuid, species: Species, position: Position, energy: i64) -> Self {
        Self {
            id,
            species,
            position,
            energy,
        }
    }

    #[must_use]
    pub fn is_starved(&self) -> bool {
        self.energy < 0
    }
}

use serde::{Deserialize, Serialize};

/// A single grass patch on the resource grid.
///
/// A living cell always carries `dormant_ticks == 0`. A dormant cell counts
/// upward once per tick until it reaches the regrowth threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceCell {
    pub alive: bool,
    pub dormant_ticks: u32,
}

impl ResourceCell {
    #[must_use]
    pub fn alive() -> Self {
        Self {
            alive: true,
            dormant_ticks: 0,
        }
    }

    #[must_use]
    pub fn dormant(dormant_ticks: u32) -> Self {
        Self {
            alive: false,
            dormant_ticks,
        }
    }
}

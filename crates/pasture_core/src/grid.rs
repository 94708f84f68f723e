//! The grass grid: a square toroidal automaton of regrowing cells.

use crate::config::AppConfig;
use pasture_data::{Position, ResourceCell};
use rand::Rng;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// `size × size` grass cells laid over a continuous world of side `world_size`.
///
/// Cells are stored row-major: cell `(i, j)` (column `i` along x, row `j`
/// along y) lives at `j * size + i`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceGrid {
    size: usize,
    world_size: f64,
    cell_size: f64,
    regrowth_ticks: u32,
    cells: Vec<ResourceCell>,
}

impl ResourceGrid {
    /// Creates a grid with every cell alive.
    #[must_use]
    pub fn new(size: usize, world_size: f64, regrowth_ticks: u32) -> Self {
        assert!(size > 0, "grid size must be positive");
        assert!(regrowth_ticks > 0, "regrowth threshold must be positive");
        Self {
            size,
            world_size,
            cell_size: world_size / size as f64,
            regrowth_ticks,
            cells: vec![ResourceCell::alive(); size * size],
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.world.grid_size,
            config.world.world_size,
            config.grass.regrowth_ticks,
        )
    }

    /// Randomises every cell independently.
    ///
    /// Dormant cells get a uniform head start in `[0, R)` so the whole field
    /// does not regrow in one synchronized wave.
    pub fn initialize<R: Rng>(&mut self, rng: &mut R, alive_chance: f64) {
        let regrowth = self.regrowth_ticks;
        for cell in &mut self.cells {
            *cell = if rng.gen_bool(alive_chance) {
                ResourceCell::alive()
            } else {
                ResourceCell::dormant(rng.gen_range(0..regrowth))
            };
        }
    }

    /// Advances every dormant cell by one tick. Returns how many regrew.
    pub fn advance(&mut self) -> usize {
        let regrowth = self.regrowth_ticks;
        let step = |cell: &mut ResourceCell| -> usize {
            if cell.alive {
                return 0;
            }
            cell.dormant_ticks += 1;
            if cell.dormant_ticks >= regrowth {
                *cell = ResourceCell::alive();
                1
            } else {
                0
            }
        };

        #[cfg(feature = "rayon")]
        {
            self.cells.par_iter_mut().map(step).sum()
        }
        #[cfg(not(feature = "rayon"))]
        {
            self.cells.iter_mut().map(step).sum()
        }
    }

    /// Eats the grass at `(i, j)`.
    ///
    /// The caller must have checked that the cell is alive.
    pub fn consume(&mut self, i: usize, j: usize) {
        let idx = self.index(i, j);
        debug_assert!(self.cells[idx].alive, "consumed a dormant cell ({i}, {j})");
        self.cells[idx] = ResourceCell::dormant(0);
    }

    #[must_use]
    pub fn count_alive(&self) -> usize {
        #[cfg(feature = "rayon")]
        {
            self.cells.par_iter().filter(|c| c.alive).count()
        }
        #[cfg(not(feature = "rayon"))]
        {
            self.cells.iter().filter(|c| c.alive).count()
        }
    }

    /// Reported grass figure: living cells divided by four.
    #[must_use]
    pub fn grass_count(&self) -> usize {
        self.count_alive() / 4
    }

    /// Cell owning a (pre-wrapped) world position.
    #[inline]
    #[must_use]
    pub fn cell_index_of(&self, pos: Position) -> (usize, usize) {
        debug_assert!(
            pos.x >= 0.0 && pos.x < self.world_size && pos.y >= 0.0 && pos.y < self.world_size,
            "unwrapped position ({}, {}) for world of size {}",
            pos.x,
            pos.y,
            self.world_size
        );
        // Division can round a coordinate just below world_size up to `size`.
        let i = ((pos.x / self.cell_size) as usize).min(self.size - 1);
        let j = ((pos.y / self.cell_size) as usize).min(self.size - 1);
        (i, j)
    }

    #[inline]
    #[must_use]
    pub fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.size && j < self.size,
            "cell ({i}, {j}) outside {0}x{0} grid",
            self.size
        );
        j * self.size + i
    }

    #[must_use]
    pub fn cell(&self, i: usize, j: usize) -> ResourceCell {
        self.cells[self.index(i, j)]
    }

    #[must_use]
    pub fn is_alive(&self, i: usize, j: usize) -> bool {
        self.cell(i, j).alive
    }

    #[must_use]
    pub fn is_alive_at(&self, pos: Position) -> bool {
        let (i, j) = self.cell_index_of(pos);
        self.is_alive(i, j)
    }

    /// Overwrites one cell. Intended for scenario setup.
    pub fn set_cell(&mut self, i: usize, j: usize, cell: ResourceCell) {
        let idx = self.index(i, j);
        self.cells[idx] = cell;
    }

    /// Marks every cell alive or every cell dormant at zero.
    pub fn fill(&mut self, alive: bool) {
        let cell = if alive {
            ResourceCell::alive()
        } else {
            ResourceCell::dormant(0)
        };
        self.cells.fill(cell);
    }

    #[must_use]
    pub fn cell_center(&self, i: usize, j: usize) -> Position {
        Position::new(
            (i as f64 + 0.5) * self.cell_size,
            (j as f64 + 0.5) * self.cell_size,
        )
    }

    /// Centres of living cells, scanning columns then rows.
    pub fn alive_centers(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |i| {
            (0..self.size)
                .filter(move |&j| self.cells[j * self.size + i].alive)
                .map(move |j| self.cell_center(i, j))
        })
    }

    #[must_use]
    pub fn cells(&self) -> &[ResourceCell] {
        &self.cells
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    #[must_use]
    pub fn world_size(&self) -> f64 {
        self.world_size
    }

    #[must_use]
    pub fn regrowth_ticks(&self) -> u32 {
        self.regrowth_ticks
    }
}

#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "rayon")]
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use crate::grid::ResourceGrid;
use pasture_data::Position;

/// Occupancy index keyed by grass cell.
///
/// Buckets agents by the grid cell they stand in, using offset-indexed
/// storage so a lookup is a slice borrow rather than a hash probe.
///
/// # Layout
/// - `cell_offsets`: offsets into `agent_indices`, one per cell plus a sentinel
/// - `agent_indices`: indices into the slice passed to [`SpatialHash::build`],
///   grouped by cell
///
/// `cell_offsets[c]..cell_offsets[c + 1]` holds the agents in cell `c`, in
/// ascending index order.
///
/// # Example
/// ```
/// use pasture_core::grid::ResourceGrid;
/// use pasture_core::spatial_hash::SpatialHash;
/// use pasture_core::Position;
///
/// let grid = ResourceGrid::new(10, 100.0, 5);
/// let mut index = SpatialHash::new();
/// index.build(&[Position::new(15.0, 15.0), Position::new(80.0, 3.0)], &grid);
/// assert_eq!(index.query_cell(1, 1), &[0]);
/// assert!(index.query_cell(0, 0).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpatialHash {
    size: usize,
    pub cell_offsets: Vec<usize>,
    pub agent_indices: Vec<usize>,
}

impl SpatialHash {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the index for `positions` over `grid`'s cells.
    pub fn build(&mut self, positions: &[Position], grid: &ResourceGrid) {
        let size = grid.size();
        let cell_count = size * size;
        self.size = size;

        let cells: Vec<usize> = positions
            .iter()
            .map(|&p| {
                let (i, j) = grid.cell_index_of(p);
                j * size + i
            })
            .collect();

        #[cfg(feature = "rayon")]
        let counts: Vec<usize> = {
            let atomic_counts: Vec<AtomicUsize> =
                (0..cell_count).map(|_| AtomicUsize::new(0)).collect();
            cells.par_iter().for_each(|&c| {
                atomic_counts[c].fetch_add(1, AtomicOrdering::Relaxed);
            });
            atomic_counts.into_iter().map(AtomicUsize::into_inner).collect()
        };
        #[cfg(not(feature = "rayon"))]
        let counts: Vec<usize> = {
            let mut counts = vec![0; cell_count];
            for &c in &cells {
                counts[c] += 1;
            }
            counts
        };

        self.cell_offsets.clear();
        self.cell_offsets.resize(cell_count + 1, 0);
        let mut total = 0;
        for (c, &count) in counts.iter().enumerate() {
            self.cell_offsets[c] = total;
            total += count;
        }
        self.cell_offsets[cell_count] = total;

        self.agent_indices.clear();
        self.agent_indices.resize(positions.len(), 0);
        let mut cursor = self.cell_offsets[..cell_count].to_vec();
        for (agent_idx, &c) in cells.iter().enumerate() {
            self.agent_indices[cursor[c]] = agent_idx;
            cursor[c] += 1;
        }
    }

    /// Agents standing in cell `(i, j)`.
    #[must_use]
    pub fn query_cell(&self, i: usize, j: usize) -> &[usize] {
        if self.cell_offsets.is_empty() {
            return &[];
        }
        assert!(
            i < self.size && j < self.size,
            "cell ({i}, {j}) outside indexed {0}x{0} grid",
            self.size
        );
        let c = j * self.size + i;
        &self.agent_indices[self.cell_offsets[c]..self.cell_offsets[c + 1]]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.agent_indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agent_indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.cell_offsets.clear();
        self.agent_indices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spatial_hash_groups_by_cell() {
        let grid = ResourceGrid::new(4, 40.0, 3);
        let positions = [
            Position::new(1.0, 1.0),
            Position::new(35.0, 35.0),
            Position::new(9.0, 2.0),
            Position::new(11.0, 1.0),
        ];
        let mut index = SpatialHash::new();
        index.build(&positions, &grid);
        assert_eq!(index.query_cell(0, 0), &[0, 2]);
        assert_eq!(index.query_cell(1, 0), &[3]);
        assert_eq!(index.query_cell(3, 3), &[1]);
        assert!(index.query_cell(2, 2).is_empty());
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn test_spatial_hash_clear() {
        let grid = ResourceGrid::new(4, 40.0, 3);
        let mut index = SpatialHash::new();
        index.build(&[Position::new(1.0, 1.0)], &grid);
        index.clear();
        assert!(index.is_empty());
        assert!(index.query_cell(0, 0).is_empty());
    }
}

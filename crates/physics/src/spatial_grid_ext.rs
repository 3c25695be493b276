//! Occupancy statistics for the uniform grid

use crate::collision::UniformGrid;

/// Statistics about the buckets built by the last query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStats {
    pub occupied_cells: usize,
    pub total_entries: usize,
    pub max_entries_per_cell: usize,
    pub average_entries_per_cell: f32,
}

impl UniformGrid {
    /// Get statistics about the grid as of the last query
    #[must_use]
    pub fn stats(&self) -> GridStats {
        let occupied_cells = self.cells.iter()
            .filter(|cell| !cell.is_empty())
            .count();

        let total_entries: usize = self.cells.iter()
            .map(Vec::len)
            .sum();

        let max_entries_per_cell = self.cells.iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0);

        #[allow(clippy::cast_precision_loss)]
        let average_entries_per_cell = if occupied_cells > 0 {
            total_entries as f32 / occupied_cells as f32
        } else {
            0.0
        };

        GridStats {
            occupied_cells,
            total_entries,
            max_entries_per_cell,
            average_entries_per_cell,
        }
    }
}

//! Broad-phase collision detection using a uniform grid
//!
//! The plane `[0, width) x [0, height)` is cut into square cells of side
//! `cell_size`. Every query drops the previous buckets, re-buckets the
//! entities by position and then walks the cells once, pairing each
//! occupied cell with itself and with [`FORWARD_NEIGHBOURS`]:
//!
//! ```text
//! |_|_|_|_|
//! |_|x|.|_|   x: the visited cell
//! |.|.|.|_|   .: the cells it is paired against
//! |_|_|_|_|
//! ```
//!
//! The other four neighbours of `x` are the ones that visit `x` through
//! this same pattern, so every pair of entities sharing a cell or sitting
//! in 8-adjacent cells is emitted exactly once per query.

use super::{CandidatePair, Locatable};
use crate::error::PhysicsError;
use crate::types::Vec2;

/// `(column, row)` offsets paired with every visited cell: right,
/// below-left, below, below-right.
pub const FORWARD_NEIGHBOURS: [(isize, isize); 4] = [(1, 0), (-1, 1), (0, 1), (1, 1)];

/// Upper bound on `columns * rows`; one empty bucket costs a `Vec` header.
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Debug, Clone)]
pub struct UniformGrid {
    width: f32,
    height: f32,
    cell_size: f32,
    columns: usize,
    rows: usize,
    /// Row-major buckets of entity indices. Empty buckets hold no allocation
    /// until an entity lands in them; capacity is kept between queries.
    pub(crate) cells: Vec<Vec<usize>>,
    pairs: Vec<CandidatePair>,
}

impl UniformGrid {
    /// Create a grid covering `width` x `height` with square cells.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidCellSize`] when `cell_size` is not a
    /// positive finite number, [`PhysicsError::InvalidExtent`] when either
    /// dimension is not or is too small to hold a single cell, and
    /// [`PhysicsError::TooManyCells`] when the cell count exceeds [`MAX_CELLS`].
    pub fn new(width: f32, height: f32, cell_size: f32) -> Result<Self, PhysicsError> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(PhysicsError::InvalidCellSize(cell_size));
        }
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(PhysicsError::InvalidExtent { width, height });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let columns = (width / cell_size).ceil() as usize;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rows = (height / cell_size).ceil() as usize;

        if columns == 0 || rows == 0 {
            return Err(PhysicsError::InvalidExtent { width, height });
        }
        let cell_count = columns
            .checked_mul(rows)
            .filter(|&count| count <= MAX_CELLS)
            .ok_or(PhysicsError::TooManyCells { columns, rows })?;

        tracing::debug!(columns, rows, cell_size, "uniform grid created");

        Ok(Self {
            width,
            height,
            cell_size,
            columns,
            rows,
            cells: vec![Vec::new(); cell_count],
            pairs: Vec::new(),
        })
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[must_use]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Column and row of the cell that owns `position`.
    ///
    /// Coordinates are divided by the cell size and truncated toward zero,
    /// then clamped per axis, so positions outside the plane land in the
    /// nearest edge cell instead of being dropped.
    #[must_use]
    pub fn cell_coords_of(&self, position: Vec2) -> (usize, usize) {
        (
            clamp_axis(position.x / self.cell_size, self.columns),
            clamp_axis(position.y / self.cell_size, self.rows),
        )
    }

    /// Flat row-major index (`row * columns + column`) of the cell owning
    /// `position`; always in `0..cell_count()`.
    #[must_use]
    pub fn cell_index_of(&self, position: Vec2) -> usize {
        let (column, row) = self.cell_coords_of(position);
        row * self.columns + column
    }

    /// Bucket all `entities` and return every candidate pair as indices into
    /// `entities`.
    ///
    /// Nothing survives from a previous call: the result only depends on the
    /// positions passed in now.
    pub fn query<T: Locatable>(&mut self, entities: &[T]) -> &[CandidatePair] {
        self.rebuild(entities);
        self.collect_pairs();

        tracing::trace!(
            entities = entities.len(),
            pairs = self.pairs.len(),
            "broad phase query"
        );

        &self.pairs
    }

    /// Pairs produced by the most recent [`UniformGrid::query`].
    #[must_use]
    pub fn pairs(&self) -> &[CandidatePair] {
        &self.pairs
    }

    /// The most recent pairs resolved back to the entities they index.
    ///
    /// `entities` must be the slice that was last queried.
    pub fn pair_refs<'a, T>(
        &'a self,
        entities: &'a [T],
    ) -> impl Iterator<Item = (&'a T, &'a T)> + 'a {
        self.pairs.iter().map(move |&(a, b)| (&entities[a], &entities[b]))
    }

    /// Entity indices bucketed into `(column, row)` by the last query.
    /// Out-of-range coordinates yield an empty slice.
    #[must_use]
    pub fn cell(&self, column: usize, row: usize) -> &[usize] {
        if column < self.columns && row < self.rows {
            &self.cells[row * self.columns + column]
        } else {
            &[]
        }
    }

    fn rebuild<T: Locatable>(&mut self, entities: &[T]) {
        for bucket in &mut self.cells {
            bucket.clear();
        }
        self.pairs.clear();

        for (index, entity) in entities.iter().enumerate() {
            let cell = self.cell_index_of(entity.position());
            self.cells[cell].push(index);
        }
    }

    fn collect_pairs(&mut self) {
        let Self {
            columns,
            rows,
            cells,
            pairs,
            ..
        } = self;
        let (columns, rows) = (*columns, *rows);

        for column in 0..columns {
            for row in 0..rows {
                let bucket = cells[row * columns + column].as_slice();
                if bucket.is_empty() {
                    continue;
                }

                pairs.extend(pairs_within_cell(bucket));

                for (d_column, d_row) in FORWARD_NEIGHBOURS {
                    let Some(neighbour) =
                        neighbour_index(column, row, d_column, d_row, columns, rows)
                    else {
                        continue;
                    };
                    pairs.extend(pairs_across_cells(bucket, cells[neighbour].as_slice()));
                }
            }
        }
    }
}

/// Every unordered pair of distinct members of one bucket, in bucket order.
pub fn pairs_within_cell<T: Copy>(bucket: &[T]) -> impl Iterator<Item = (T, T)> + '_ {
    bucket
        .iter()
        .enumerate()
        .flat_map(move |(i, &a)| bucket[i + 1..].iter().map(move |&b| (a, b)))
}

/// The full cross product of two buckets, source entry first.
pub fn pairs_across_cells<'a, T: Copy>(
    source: &'a [T],
    target: &'a [T],
) -> impl Iterator<Item = (T, T)> + 'a {
    source
        .iter()
        .flat_map(move |&a| target.iter().map(move |&b| (a, b)))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn clamp_axis(scaled: f32, cells: usize) -> usize {
    // `as` truncates toward zero and saturates; NaN becomes 0.
    let truncated = scaled as i64;
    truncated.clamp(0, cells as i64 - 1) as usize
}

fn neighbour_index(
    column: usize,
    row: usize,
    d_column: isize,
    d_row: isize,
    columns: usize,
    rows: usize,
) -> Option<usize> {
    let column = column.checked_add_signed(d_column).filter(|&c| c < columns)?;
    let row = row.checked_add_signed(d_row).filter(|&r| r < rows)?;
    Some(row * columns + column)
}

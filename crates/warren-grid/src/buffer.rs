//! Flat, row-major cell storage with bounds-checked addressing.

use warren_core::{Cell, CellKind, Pos, WorldConfig};

use crate::error::GridError;

/// A rows × cols array of [`Cell`]s stored row-major.
///
/// Cell `(r, c)` lives at flat index `r * cols + c`; iteration order over
/// [`positions`](CellBuffer::positions) is therefore the fixed row-major
/// scan order the simulation rules depend on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellBuffer {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl CellBuffer {
    /// Create an all-empty buffer.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either axis is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds
    /// [`WorldConfig::MAX_DIM`].
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > WorldConfig::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: WorldConfig::MAX_DIM,
            });
        }
        if cols > WorldConfig::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: WorldConfig::MAX_DIM,
            });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; (rows as usize) * (cols as usize)],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, at: Pos) -> usize {
        assert!(
            at.row < self.rows && at.col < self.cols,
            "coordinate {at} out of bounds for {}x{} grid",
            self.rows,
            self.cols,
        );
        (at.row as usize) * (self.cols as usize) + (at.col as usize)
    }

    /// Read the cell at `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is out of bounds.
    pub fn get(&self, at: Pos) -> Cell {
        self.cells[self.index(at)]
    }

    /// Write the cell at `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is out of bounds.
    pub fn set(&mut self, at: Pos, cell: Cell) {
        let idx = self.index(at);
        self.cells[idx] = cell;
    }

    /// Read a cell by signed coordinates, returning `None` when the
    /// coordinate falls outside the grid.
    ///
    /// This is the neighbour-probing primitive: direction offsets are
    /// applied in signed arithmetic and out-of-bounds targets simply
    /// report as non-viable.
    pub fn probe(&self, row: i64, col: i64) -> Option<Cell> {
        if row < 0 || row >= self.rows as i64 || col < 0 || col >= self.cols as i64 {
            return None;
        }
        Some(self.get(Pos::new(row as u32, col as u32)))
    }

    /// All coordinates in row-major scan order (row ascending, then
    /// column ascending).
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Pos::new(r, c)))
    }

    /// Count the populated cells by kind.
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for cell in &self.cells {
            match cell.kind() {
                CellKind::Empty => {}
                CellKind::Rock => census.rocks += 1,
                CellKind::Rabbit => census.rabbits += 1,
                CellKind::Fox => census.foxes += 1,
            }
        }
        census
    }
}

/// Population counts for one buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Census {
    /// Number of rock cells.
    pub rocks: usize,
    /// Number of rabbit cells.
    pub rabbits: usize,
    /// Number of fox cells.
    pub foxes: usize,
}

impl Census {
    /// Total number of populated (non-empty) cells.
    pub fn occupied(&self) -> usize {
        self.rocks + self.rabbits + self.foxes
    }
}

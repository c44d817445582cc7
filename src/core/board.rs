//! Board module - manages the game grid
//!
//! The board is a `cols` x `rows` grid of [`Cell`]s stored in a flat vector
//! for cache locality. Coordinates: (x, y) where x ranges left to right and
//! y ranges top to bottom; row 0 is the spawn edge and gravity pulls cells
//! toward `rows - 1`.
//!
//! The slot array is the single source of truth for "what is where". Cells
//! do not carry their own coordinates, so moving a cell is a plain slot
//! reassignment and the slot/coordinate consistency invariant holds by
//! construction.

use crate::types::{Cell, Pos};

/// The game board - flat row-major cell storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: u8,
    rows: u8,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new all-empty board.
    ///
    /// Dimensions must already be validated (non-zero, within
    /// `MAX_GRID_DIM`); `GridConfig::validate` is the gate for that.
    pub fn new(cols: u8, rows: u8) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::empty(); cols as usize * rows as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates.
    ///
    /// Out-of-range coordinates are a contract violation: every caller
    /// operates within known grid bounds, so this panics rather than
    /// returning a recoverable error.
    #[inline(always)]
    fn index(&self, x: u8, y: u8) -> usize {
        assert!(
            x < self.cols && y < self.rows,
            "cell ({}, {}) out of bounds for {}x{} board",
            x,
            y,
            self.cols,
            self.rows
        );
        y as usize * self.cols as usize + x as usize
    }

    /// Get width of the board
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Get height of the board
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Cell at position (x, y); panics if out of bounds
    pub fn get(&self, x: u8, y: u8) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    /// Mutable cell at position (x, y); panics if out of bounds
    pub fn get_mut(&mut self, x: u8, y: u8) -> &mut Cell {
        let idx = self.index(x, y);
        &mut self.cells[idx]
    }

    /// Overwrite the cell at position (x, y); panics if out of bounds
    pub fn set(&mut self, x: u8, y: u8, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    /// Check signed coordinates against the grid bounds.
    ///
    /// Match scans walk outward from a cell and use this to terminate at
    /// the edge, which is ordinary control flow rather than an error.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.cols as i32 && y >= 0 && y < self.rows as i32
    }

    /// True iff the two positions differ by exactly 1 in exactly one axis.
    /// Symmetric in its arguments.
    pub fn is_adjacent(a: Pos, b: Pos) -> bool {
        let dx = (a.x as i32 - b.x as i32).abs();
        let dy = (a.y as i32 - b.y as i32).abs();
        dx + dy == 1
    }

    /// Exchange the occupants of two slots.
    ///
    /// Precondition per the swap contract: both cells movable. Returns
    /// false (leaving the board untouched) when that does not hold, so
    /// callers that already checked pay nothing.
    pub fn swap(&mut self, a: Pos, b: Pos) -> bool {
        if !self.get(a.x, a.y).is_movable() || !self.get(b.x, b.y).is_movable() {
            return false;
        }
        let ia = self.index(a.x, a.y);
        let ib = self.index(b.x, b.y);
        self.cells.swap(ia, ib);
        true
    }

    /// Write the board as color codes (0 = empty, palette index + 1
    /// otherwise) into a caller-owned buffer, row-major.
    pub fn write_color_codes(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(Cell::color_code));
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Create from a row-major 2D vector for testing
    #[cfg(test)]
    pub fn from_rows(rows_2d: Vec<Vec<Cell>>) -> Self {
        let rows = rows_2d.len() as u8;
        assert!(rows > 0);
        let cols = rows_2d[0].len() as u8;
        assert!(rows_2d.iter().all(|row| row.len() == cols as usize));

        Self {
            cols,
            rows,
            cells: rows_2d.into_iter().flatten().collect(),
        }
    }

    /// Convert to a row-major 2D vector for testing/display
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        let cols = self.cols as usize;
        (0..self.rows as usize)
            .map(|y| self.cells[y * cols..(y + 1) * cols].to_vec())
            .collect()
    }
}

//! Board module - manages the game grid
//!
//! The board is a `rows x columns` grid (20x10 by default) where each cell is
//! either empty or occupied by a locked piece color.
//! Uses a flat row-major vector so row shifts are plain `copy_within` calls.
//! Coordinates: (row, col) where row 0 is the top and col 0 the left edge.

use crate::types::{Cell, Color, BOARD_COLUMNS, BOARD_ROWS, MAX_COLUMNS, MAX_ROWS};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u16,
    columns: u16,
    /// Flat array of cells, row-major order (row * columns + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the given dimensions.
    ///
    /// Dimensions above [`MAX_ROWS`] x [`MAX_COLUMNS`] are clamped so every
    /// cell stays addressable with `i16` coordinates.
    pub fn new(rows: u16, columns: u16) -> Self {
        let rows = rows.min(MAX_ROWS);
        let columns = columns.min(MAX_COLUMNS);
        Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows as usize * columns as usize],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i16, col: i16) -> Option<usize> {
        if row < 0 || row >= self.rows as i16 || col < 0 || col >= self.columns as i16 {
            return None;
        }
        Some(row as usize * self.columns as usize + col as usize)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Get cell at (row, col), or None if out of bounds
    pub fn get(&self, row: i16, col: i16) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// True iff (row, col) is inside the board and empty.
    ///
    /// Out-of-bounds positions are never clear.
    pub fn is_clear(&self, row: i16, col: i16) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Mark a cell as occupied by `color`.
    /// Returns false (and changes nothing) if out of bounds
    pub fn occupy(&mut self, row: i16, col: i16, color: Color) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = Cell::Occupied(color);
                true
            }
            None => false,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(Cell::is_occupied))
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows as usize {
            return None;
        }
        let width = self.columns as usize;
        let start = row * width;
        Some(&self.cells[start..start + width])
    }

    /// Remove every full row, shift the rows above it down and refill the
    /// top with empty rows. Returns how many rows were removed.
    ///
    /// Single bottom-to-top pass: surviving rows are compacted toward the
    /// bottom, so rows that slide into a cleared slot are examined exactly
    /// once, like re-scanning the same index after each shift.
    pub fn clear_completed_rows(&mut self) -> usize {
        let width = self.columns as usize;
        let mut write_row = self.rows as usize;
        let mut cleared = 0;

        for read_row in (0..self.rows as usize).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells.copy_within(src..src + width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(Cell::Empty);
        cleared
    }

    /// Number of occupied cells on the whole board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_ROWS, BOARD_COLUMNS)
    }
}

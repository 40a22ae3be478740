//! Pieces module - the falling piece and its geometry
//!
//! A piece is a shape plus the four board cells it currently covers.
//! Movement and rotation never mutate a piece directly: they produce a
//! candidate cell set that the engine validates and then commits whole.
//!
//! Rotation turns every cell 90° around the piece's second cell (index 1),
//! for all shapes. There is no wall kick and no special case for O or I, so
//! O visibly wobbles and I swings around its second cell.

use serde::Serialize;

use crate::types::{Color, Coord, PieceCells, Shape, BOARD_COLUMNS};

/// Index of the rotation pivot inside [`PieceCells`].
pub const PIVOT_INDEX: usize = 1;

/// Column shift applied to the spawn table on a board of `columns` columns.
///
/// Zero on the reference width; keeps pieces centered elsewhere.
pub fn spawn_offset(columns: u16) -> i16 {
    ((i32::from(columns) - i32::from(BOARD_COLUMNS)) / 2) as i16
}

/// Spawn cells of `shape` on a board of `columns` columns
pub fn spawn_cells(shape: Shape, columns: u16) -> PieceCells {
    let offset = spawn_offset(columns);
    shape.spawn_cells().map(|(row, col)| (row, col + offset))
}

/// Translate every cell by (d_row, d_col)
pub fn shifted(cells: &PieceCells, d_row: i16, d_col: i16) -> PieceCells {
    cells.map(|(row, col)| (row + d_row, col + d_col))
}

/// Rotate every cell 90° around `cells[PIVOT_INDEX]`.
///
/// `(r, c)` around pivot `(cr, cc)` becomes `(cr - (c - cc), cc + (r - cr))`.
pub fn rotated(cells: &PieceCells) -> PieceCells {
    let (cr, cc) = cells[PIVOT_INDEX];
    cells.map(|(row, col)| (cr - (col - cc), cc + (row - cr)))
}

/// The active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    shape: Shape,
    color: Color,
    cells: PieceCells,
}

impl Piece {
    /// Create a piece at its spawn position on the reference-width board
    pub fn new(shape: Shape) -> Self {
        Self::spawn(shape, BOARD_COLUMNS)
    }

    /// Create a piece at its spawn position on a board of `columns` columns
    pub fn spawn(shape: Shape, columns: u16) -> Self {
        Self {
            shape,
            color: shape.color(),
            cells: spawn_cells(shape, columns),
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn cells(&self) -> &PieceCells {
        &self.cells
    }

    /// Candidate cells one step in the given direction
    pub fn shifted(&self, d_row: i16, d_col: i16) -> PieceCells {
        shifted(&self.cells, d_row, d_col)
    }

    /// Candidate cells after one rotation
    pub fn rotated(&self) -> PieceCells {
        rotated(&self.cells)
    }

    /// Replace all four cells at once.
    pub(crate) fn set_cells(&mut self, cells: PieceCells) {
        self.cells = cells;
    }

    /// The pivot cell used by [`Piece::rotated`]
    pub fn pivot(&self) -> Coord {
        self.cells[PIVOT_INDEX]
    }
}

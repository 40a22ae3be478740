//! Snapshot module - read-only game state for renderers
//!
//! A [`GameSnapshot`] is an owned copy taken after every change. Renderers
//! and other processes read it (it serializes with serde) and can never
//! reach back into the engine.
//!
//! ```
//! use blockfall_core::{Board, GameEngine, ShapeSequence};
//! use blockfall_types::{Cell, Color, Shape};
//!
//! let engine = GameEngine::with_board(Board::default(), ShapeSequence::repeat(Shape::O));
//! let snap = engine.snapshot();
//!
//! // The falling O is drawn over the empty board, but is not a locked cell.
//! assert_eq!(snap.visible_cell(0, 4), Some(Cell::Occupied(Color::Yellow)));
//! assert_eq!(snap.cell(0, 4), Some(Cell::Empty));
//! assert_eq!(snap.visible_cell(20, 0), None);
//! ```

use serde::Serialize;

use crate::pieces::Piece;
use crate::types::{Cell, Color, PieceCells, Shape};

/// The falling piece as seen from outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceSnapshot {
    pub shape: Shape,
    pub color: Color,
    pub cells: PieceCells,
}

impl From<&Piece> for PieceSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            shape: value.shape(),
            color: value.color(),
            cells: *value.cells(),
        }
    }
}

/// Read-only copy of the engine state, handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub rows: u16,
    pub columns: u16,
    /// Locked cells only, row-major.
    pub cells: Vec<Cell>,
    pub piece: Option<PieceSnapshot>,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Locked cell at (row, col); the falling piece is not included.
    pub fn cell(&self, row: u16, col: u16) -> Option<Cell> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.cells
            .get(row as usize * self.columns as usize + col as usize)
            .copied()
    }

    /// What a renderer should paint at (row, col): the falling piece wins
    /// over the locked cell underneath.
    pub fn visible_cell(&self, row: u16, col: u16) -> Option<Cell> {
        let locked = self.cell(row, col)?;
        match self.piece {
            Some(piece) if piece.cells.contains(&(row as i16, col as i16)) => {
                Some(Cell::Occupied(piece.color))
            }
            _ => Some(locked),
        }
    }

    /// Still accepting commands?
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

//! Game engine module - the rules of play
//!
//! Owns the board, the falling piece and the game-over flag. Every command
//! builds a candidate cell set, checks it with [`GameEngine::can_move`] and
//! either commits all four cells or does nothing. A piece that cannot fall
//! any further is locked into the board, full rows are cleared and the next
//! piece spawns; if that piece does not fit, the game is over for good.
//!
//! Nothing here knows about time. Gravity is whoever calls
//! [`GameEngine::tick`].

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::config::{ConfigError, EngineConfig};
use crate::pieces::Piece;
use crate::rng::{ShapeSource, SimpleRng};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{Coord, GameCommand, BOARD_COLUMNS, BOARD_ROWS};

/// Outcome of a single downward step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descent {
    /// The piece fell one row.
    Moved,
    /// The piece was locked and a new one spawned.
    Locked { rows_cleared: usize },
    /// The piece was locked and the next one had no room: game over.
    ToppedOut { rows_cleared: usize },
    /// Nothing to do (game already over).
    Idle,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine<S = SimpleRng> {
    board: Board,
    current: Option<Piece>,
    game_over: bool,
    source: S,
}

impl GameEngine<SimpleRng> {
    /// New game on the reference 20x10 board with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::new(BOARD_ROWS, BOARD_COLUMNS), SimpleRng::new(seed))
    }

    /// New game sized by `config`, seeded by `config.seed` (0 if unset)
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        Self::with_source(config, SimpleRng::new(config.seed.unwrap_or(0)))
    }
}

impl<S: ShapeSource> GameEngine<S> {
    /// New game sized by `config`, drawing shapes from `source`
    pub fn with_source(config: &EngineConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_board(
            Board::new(config.rows, config.columns),
            source,
        ))
    }

    /// Start a game on an existing board and spawn the first piece.
    ///
    /// If the board already blocks the spawn area the game starts over.
    pub fn with_board(board: Board, source: S) -> Self {
        let mut engine = Self {
            board,
            current: None,
            game_over: false,
            source,
        };
        engine.spawn_piece();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// True iff every cell is inside the board and not occupied.
    pub fn can_move(&self, cells: &[Coord]) -> bool {
        cells
            .iter()
            .all(|&(row, col)| self.board.is_clear(row, col))
    }

    /// Run one command. Returns true if the state changed.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::Rotate => self.rotate(),
            GameCommand::MoveDown => self.move_down() != Descent::Idle,
            GameCommand::Tick => self.tick() != Descent::Idle,
        }
    }

    /// Shift one column left. Returns false if blocked.
    pub fn move_left(&mut self) -> bool {
        self.try_shift(0, -1)
    }

    /// Shift one column right. Returns false if blocked.
    pub fn move_right(&mut self) -> bool {
        self.try_shift(0, 1)
    }

    /// Rotate 90° around the piece's second cell. Returns false if blocked.
    pub fn rotate(&mut self) -> bool {
        let Some(candidate) = self.playable_piece().map(Piece::rotated) else {
            return false;
        };
        self.commit(candidate)
    }

    /// One step of gravity.
    pub fn tick(&mut self) -> Descent {
        self.move_down()
    }

    /// Fall one row, or lock the piece if it is resting on something.
    pub fn move_down(&mut self) -> Descent {
        let Some(candidate) = self.playable_piece().map(|piece| piece.shifted(1, 0)) else {
            return Descent::Idle;
        };
        if self.commit(candidate) {
            return Descent::Moved;
        }

        let rows_cleared = self.lock_piece();
        if self.spawn_piece() {
            Descent::Locked { rows_cleared }
        } else {
            Descent::ToppedOut { rows_cleared }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rows: self.board.rows(),
            columns: self.board.columns(),
            cells: self.board.cells().to_vec(),
            piece: self.current.as_ref().map(PieceSnapshot::from),
            game_over: self.game_over,
        }
    }

    fn playable_piece(&self) -> Option<&Piece> {
        if self.game_over {
            return None;
        }
        self.current.as_ref()
    }

    fn try_shift(&mut self, d_row: i16, d_col: i16) -> bool {
        let Some(candidate) = self
            .playable_piece()
            .map(|piece| piece.shifted(d_row, d_col))
        else {
            return false;
        };
        self.commit(candidate)
    }

    /// Replace the piece's cells if the candidate fits.
    fn commit(&mut self, candidate: [Coord; 4]) -> bool {
        if !self.can_move(&candidate) {
            return false;
        }
        match self.current.as_mut() {
            Some(piece) => {
                piece.set_cells(candidate);
                true
            }
            None => false,
        }
    }

    /// Write the piece into the board and clear full rows.
    fn lock_piece(&mut self) -> usize {
        let Some(piece) = self.current.take() else {
            return 0;
        };
        for &(row, col) in piece.cells() {
            self.board.occupy(row, col, piece.color());
        }
        let rows_cleared = self.board.clear_completed_rows();
        debug!(shape = piece.shape().as_str(), rows_cleared, "piece locked");
        rows_cleared
    }

    /// Spawn the next piece. On a blocked spawn the game ends and no piece
    /// stays current.
    fn spawn_piece(&mut self) -> bool {
        let piece = Piece::spawn(self.source.next_shape(), self.board.columns());
        if !self.can_move(piece.cells()) {
            self.game_over = true;
            self.current = None;
            info!(
                shape = piece.shape().as_str(),
                occupied = self.board.occupied_count(),
                "spawn blocked, game over"
            );
            return false;
        }
        trace!(shape = piece.shape().as_str(), "piece spawned");
        self.current = Some(piece);
        true
    }
}

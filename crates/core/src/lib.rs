//! Core game logic module - pure, deterministic, and testable
//!
//! Everything with rules or invariants lives here: the grid, piece
//! geometry, move validation, locking, line clears and game over.
//! It has **zero dependencies** on terminals, timers or async runtimes:
//!
//! - **Deterministic**: same seed (or same [`ShapeSequence`]) gives the same game
//! - **Synchronous**: every operation finishes immediately, nothing blocks
//! - **Silent on refusal**: a blocked move returns `false` and changes nothing
//!
//! # Module Structure
//!
//! - [`board`]: `rows x columns` grid with occupancy checks and line clearing
//! - [`pieces`]: the falling piece, spawn layout and pivot rotation
//! - [`rng`]: shape sources (seeded uniform RNG, fixed sequences)
//! - [`game_engine`]: movement, locking, spawning and game over
//! - [`snapshot`]: read-only state handed to renderers
//! - [`config`]: board size and gravity settings
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Descent, GameEngine};
//! use blockfall_types::GameCommand;
//!
//! let mut game = GameEngine::new(12345);
//!
//! game.apply(GameCommand::MoveRight);
//! game.apply(GameCommand::Rotate);
//!
//! // Gravity: keep ticking until the piece lands.
//! while game.tick() == Descent::Moved {}
//!
//! assert_eq!(game.board().occupied_count(), 4);
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod config;
pub mod game_engine;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, EngineConfig};
pub use game_engine::{Descent, GameEngine};
pub use pieces::Piece;
pub use rng::{ShapeSequence, ShapeSource, SimpleRng};
pub use snapshot::{GameSnapshot, PieceSnapshot};

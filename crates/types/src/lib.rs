//! Core types module - shared data structures and constants
//!
//! Pure data shared by the engine, the gravity driver and the front-ends.
//! Nothing here knows about terminals, timers or threads.
//!
//! # Coordinates
//!
//! Cells are addressed as `(row, column)` pairs. Row 0 is the top of the
//! board and rows grow downward; column 0 is the left edge. Coordinates are
//! signed so a candidate move can step outside the board and be rejected.
//!
//! # Reference dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_ROWS` | 20 | Default board height |
//! | `BOARD_COLUMNS` | 10 | Default board width, and the width the spawn table is laid out for |
//! | `GRAVITY_INTERVAL_MS` | 500 | Default gravity period |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, Color, GameCommand, Shape};
//!
//! assert_eq!(Shape::from_str("t"), Some(Shape::T));
//! assert_eq!(Shape::T.color(), Color::Purple);
//!
//! let cell = Cell::Occupied(Color::Cyan);
//! assert!(cell.is_occupied());
//! assert_eq!(cell.color(), Some(Color::Cyan));
//!
//! assert_eq!(GameCommand::from_str("rotate"), Some(GameCommand::Rotate));
//! ```

use serde::Serialize;

/// Default board height in rows.
pub const BOARD_ROWS: u16 = 20;

/// Default board width in columns.
///
/// The spawn layouts in [`Shape::spawn_cells`] are expressed for this width.
pub const BOARD_COLUMNS: u16 = 10;

/// Smallest board height that can hold a freshly spawned piece.
pub const MIN_ROWS: u16 = 2;

/// Smallest board width that can hold every spawn layout.
pub const MIN_COLUMNS: u16 = 8;

/// Largest board height. Rows must stay addressable as an `i16` [`Coord`].
pub const MAX_ROWS: u16 = 1024;

/// Largest board width. Columns must stay addressable as an `i16` [`Coord`].
pub const MAX_COLUMNS: u16 = 1024;

/// Default gravity period in milliseconds.
pub const GRAVITY_INTERVAL_MS: u32 = 500;

/// A board position as `(row, column)`.
pub type Coord = (i16, i16);

/// The four cells a piece occupies.
pub type PieceCells = [Coord; 4];

/// Display color of a shape and of the cells it leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Green => "green",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Orange => "orange",
        }
    }
}

/// A single board cell.
///
/// Emptiness is its own variant; a color is never used as an "empty" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "color")]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Color),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color) => Some(*color),
        }
    }
}

/// The seven piece shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shape {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

/// Per-shape constant data.
struct ShapeDef {
    color: Color,
    cells: PieceCells,
}

/// Indexed by `Shape as usize`.
const SHAPE_TABLE: [ShapeDef; 7] = [
    ShapeDef {
        color: Color::Cyan,
        cells: [(0, 4), (0, 5), (0, 6), (0, 7)],
    },
    ShapeDef {
        color: Color::Yellow,
        cells: [(0, 4), (0, 5), (1, 4), (1, 5)],
    },
    ShapeDef {
        color: Color::Purple,
        cells: [(0, 4), (1, 3), (1, 4), (1, 5)],
    },
    ShapeDef {
        color: Color::Green,
        cells: [(0, 5), (0, 6), (1, 4), (1, 5)],
    },
    ShapeDef {
        color: Color::Red,
        cells: [(0, 4), (0, 5), (1, 5), (1, 6)],
    },
    ShapeDef {
        color: Color::Blue,
        cells: [(0, 4), (1, 4), (1, 5), (1, 6)],
    },
    ShapeDef {
        color: Color::Orange,
        cells: [(0, 6), (1, 4), (1, 5), (1, 6)],
    },
];

impl Shape {
    /// All shapes, in table order.
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::S,
        Shape::Z,
        Shape::J,
        Shape::L,
    ];

    fn def(self) -> &'static ShapeDef {
        &SHAPE_TABLE[self as usize]
    }

    /// The fixed color of this shape.
    pub fn color(self) -> Color {
        self.def().color
    }

    /// Spawn cells on a board of [`BOARD_COLUMNS`] columns.
    ///
    /// The order matters: index 1 is the rotation pivot.
    pub fn spawn_cells(self) -> PieceCells {
        self.def().cells
    }

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("i"), Some(Shape::I));
    /// assert_eq!(Shape::from_str("L"), Some(Shape::L));
    /// assert_eq!(Shape::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(Shape::I),
            "o" => Some(Shape::O),
            "t" => Some(Shape::T),
            "s" => Some(Shape::S),
            "z" => Some(Shape::Z),
            "j" => Some(Shape::J),
            "l" => Some(Shape::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "i",
            Shape::O => "o",
            Shape::T => "t",
            Shape::S => "s",
            Shape::Z => "z",
            Shape::J => "j",
            Shape::L => "l",
        }
    }
}

/// Commands accepted by the engine.
///
/// `Tick` is what the gravity clock sends; it behaves exactly like `MoveDown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameCommand {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    Tick,
}

impl GameCommand {
    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("moveLeft"), Some(GameCommand::MoveLeft));
    /// assert_eq!(GameCommand::from_str("TICK"), Some(GameCommand::Tick));
    /// assert_eq!(GameCommand::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "movedown" => Some(GameCommand::MoveDown),
            "rotate" => Some(GameCommand::Rotate),
            "tick" => Some(GameCommand::Tick),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::MoveDown => "moveDown",
            GameCommand::Rotate => "rotate",
            GameCommand::Tick => "tick",
        }
    }
}

//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. Snapshots are painted into a
//! plain framebuffer ([`GameView`]), and the framebuffer is flushed to the
//! terminal with crossterm ([`TerminalRenderer`]).
//!
//! The engine never calls into this crate; it only consumes snapshots.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{color_rgb, GameView, Viewport};
pub use renderer::{changed_rows, encode_frame_into, TerminalRenderer};

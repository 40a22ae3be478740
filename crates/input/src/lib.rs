//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameCommand`]. Each key
//! press is one discrete command; there is no key-repeat handling here, the
//! terminal's own auto-repeat is passed through as further presses.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};

//! Engine runtime module - running a game in real time
//!
//! The core engine is synchronous and clock-free. This crate embeds it in a
//! tokio application:
//!
//! - [`SharedEngine`]: mutex-guarded engine handle shared by input and gravity,
//!   broadcasting a [`GameSnapshot`](blockfall_core::GameSnapshot) after every change
//! - [`GravityClock`]: periodic task that ticks the engine until game over
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use blockfall_core::GameEngine;
//! use blockfall_engine::{GravityClock, SharedEngine};
//! use blockfall_types::GameCommand;
//!
//! # async fn demo() {
//! let engine = SharedEngine::new(GameEngine::new(1));
//! let clock = GravityClock::start(engine.clone(), Duration::from_millis(500));
//!
//! let mut updates = engine.subscribe();
//! engine.apply(GameCommand::MoveLeft);
//! updates.changed().await.ok();
//!
//! clock.stop().await;
//! # }
//! ```

pub mod clock;
pub mod shared;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use clock::GravityClock;
pub use shared::SharedEngine;

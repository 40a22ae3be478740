//! SharedEngine: one engine, many callers.
//!
//! Player input and the gravity clock usually run on different tasks. They
//! all go through this handle, which serializes every mutation behind one
//! mutex and publishes a fresh [`GameSnapshot`] after each change.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::core::{Descent, GameEngine, GameSnapshot, ShapeSource, SimpleRng};
use crate::types::GameCommand;

struct Inner<S> {
    engine: Mutex<GameEngine<S>>,
    snapshots: watch::Sender<GameSnapshot>,
}

/// Cloneable handle to a single [`GameEngine`].
pub struct SharedEngine<S = SimpleRng> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for SharedEngine<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ShapeSource> SharedEngine<S> {
    pub fn new(engine: GameEngine<S>) -> Self {
        let (snapshots, _) = watch::channel(engine.snapshot());
        Self {
            inner: Arc::new(Inner {
                engine: Mutex::new(engine),
                snapshots,
            }),
        }
    }

    /// Run one command. Returns true if the state changed.
    pub fn apply(&self, command: GameCommand) -> bool {
        let mut engine = self.lock();
        let changed = engine.apply(command);
        if changed {
            self.inner.snapshots.send_replace(engine.snapshot());
        }
        changed
    }

    /// One gravity step.
    pub fn tick(&self) -> Descent {
        let mut engine = self.lock();
        let descent = engine.tick();
        if descent != Descent::Idle {
            self.inner.snapshots.send_replace(engine.snapshot());
        }
        descent
    }

    pub fn is_game_over(&self) -> bool {
        self.lock().is_game_over()
    }

    /// Latest published state.
    pub fn snapshot(&self) -> GameSnapshot {
        self.inner.snapshots.borrow().clone()
    }

    /// Receiver that wakes on every published change.
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.inner.snapshots.subscribe()
    }

    /// Read the engine under the lock.
    pub fn with_engine<R>(&self, f: impl FnOnce(&GameEngine<S>) -> R) -> R {
        f(&self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, GameEngine<S>> {
        // Engine operations never leave the state half-written, so a
        // poisoned lock still guards a consistent engine.
        self.inner
            .engine
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, ShapeSequence};
    use crate::types::Shape;

    fn shared(shape: Shape) -> SharedEngine<ShapeSequence> {
        SharedEngine::new(GameEngine::with_board(
            Board::default(),
            ShapeSequence::repeat(shape),
        ))
    }

    #[test]
    fn publishes_after_each_change() {
        let engine = shared(Shape::O);
        let mut rx = engine.subscribe();
        assert!(!rx.has_changed().unwrap());

        assert!(engine.apply(GameCommand::MoveLeft));
        assert!(rx.has_changed().unwrap());
        let snap = rx.borrow_and_update().clone();
        assert_eq!(
            snap.piece.map(|p| p.cells),
            Some([(0, 3), (0, 4), (1, 3), (1, 4)])
        );
    }

    #[test]
    fn blocked_move_publishes_nothing() {
        let engine = shared(Shape::I);
        // I spans columns 4..=7; two steps reach the right wall.
        for _ in 0..2 {
            assert!(engine.apply(GameCommand::MoveRight));
        }
        let mut rx = engine.subscribe();
        rx.borrow_and_update();
        assert!(!engine.apply(GameCommand::MoveRight));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn clones_share_state() {
        let a = shared(Shape::T);
        let b = a.clone();
        a.tick();
        assert_eq!(a.snapshot(), b.snapshot());
        let first = b.with_engine(|e| e.current_piece().map(|p| p.cells()[0]));
        assert_eq!(first, Some((1, 4)));
    }
}

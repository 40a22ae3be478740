//! GravityClock: the periodic `tick` driver.
//!
//! A tokio task that calls [`SharedEngine::tick`] once per interval and ends
//! by itself when the game is over. The clock is tied to its handle:
//! dropping the handle aborts the task, and [`GravityClock::stop`] also waits
//! for it so that no tick can land afterwards.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::core::{Descent, ShapeSource};
use crate::shared::SharedEngine;

/// Shortest accepted period; `tokio::time::interval` rejects zero.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

pub struct GravityClock {
    handle: Option<JoinHandle<()>>,
}

impl GravityClock {
    /// Start ticking `engine` every `interval`. The first tick fires one
    /// full interval after start.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<S>(engine: SharedEngine<S>, interval: Duration) -> Self
    where
        S: ShapeSource + Send + 'static,
    {
        let period = interval.max(MIN_INTERVAL);
        info!(interval_ms = period.as_millis() as u64, "gravity clock started");
        let handle = tokio::spawn(run(engine, period));
        Self {
            handle: Some(handle),
        }
    }

    /// False once the game has ended or the clock was stopped.
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the clock and wait until the task is gone.
    pub async fn stop(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            // Cancelled or finished: either way no tick runs after this.
            match handle.await {
                Err(err) if err.is_panic() => warn!(error = %err, "gravity clock panicked"),
                _ => debug!("gravity clock stopped"),
            }
        }
    }
}

impl Drop for GravityClock {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

async fn run<S>(engine: SharedEngine<S>, period: Duration)
where
    S: ShapeSource + Send + 'static,
{
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        match engine.tick() {
            Descent::Moved | Descent::Locked { .. } => {}
            Descent::ToppedOut { .. } | Descent::Idle => break,
        }
    }
    info!("gravity clock finished: game over");
}

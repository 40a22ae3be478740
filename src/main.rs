//! Terminal blockfall runner (default binary).
//!
//! Wires the engine to its collaborators: crossterm keys become commands,
//! a tokio gravity clock ticks the engine, and every published snapshot is
//! redrawn through the framebuffer renderer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use blockfall::core::{EngineConfig, GameEngine};
use blockfall::engine::{GravityClock, SharedEngine};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameCommand, BOARD_COLUMNS, BOARD_ROWS, GRAVITY_INTERVAL_MS};

/// How long the input thread waits for a key before re-checking for shutdown.
const INPUT_POLL: Duration = Duration::from_millis(100);

/// blockfall - falling-block puzzle in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board height in rows
    #[arg(long, env = "BLOCKFALL_ROWS", default_value_t = BOARD_ROWS)]
    rows: u16,

    /// Board width in columns
    #[arg(long, env = "BLOCKFALL_COLUMNS", default_value_t = BOARD_COLUMNS)]
    columns: u16,

    /// Gravity period in milliseconds
    #[arg(long, env = "BLOCKFALL_GRAVITY_MS", default_value_t = GRAVITY_INTERVAL_MS)]
    gravity_ms: u32,

    /// Seed for shape selection (defaults to the current time)
    #[arg(long, env = "BLOCKFALL_SEED")]
    seed: Option<u32>,

    /// Write logs to this file; filter with RUST_LOG
    #[arg(long, env = "BLOCKFALL_LOG_FILE")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            rows: self.rows,
            columns: self.columns,
            gravity_interval_ms: self.gravity_ms,
            seed: Some(self.seed.unwrap_or_else(seed_from_clock)),
        }
    }
}

enum Input {
    Command(GameCommand),
    Resize,
    Quit,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = args.engine_config();
    let engine = GameEngine::from_config(&config).context("invalid game configuration")?;
    info!(
        rows = config.rows,
        columns = config.columns,
        gravity_ms = config.gravity_interval_ms,
        seed = config.seed,
        "starting game"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, engine, config.gravity_interval()).await;

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

async fn run(term: &mut TerminalRenderer, engine: GameEngine, gravity: Duration) -> Result<()> {
    let shared = SharedEngine::new(engine);
    let clock = GravityClock::start(shared.clone(), gravity);
    let mut snapshots = shared.subscribe();

    let (input_tx, mut input_rx) = mpsc::unbounded_channel();
    let input_task = tokio::task::spawn_blocking(move || read_input(input_tx));

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = shared.snapshot();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                snap = snapshots.borrow_and_update().clone();
                dirty = true;
            }
            input = input_rx.recv() => match input {
                Some(Input::Command(command)) => {
                    shared.apply(command);
                }
                Some(Input::Resize) => {
                    term.invalidate();
                    dirty = true;
                }
                Some(Input::Quit) | None => break,
            },
        }
    }

    clock.stop().await;
    drop(input_rx);
    match input_task.await {
        Ok(Err(err)) => warn!(error = %err, "input reader failed"),
        Err(err) => warn!(error = %err, "input reader panicked"),
        Ok(Ok(())) => {}
    }
    info!(game_over = shared.is_game_over(), "session ended");
    Ok(())
}

/// Blocking key reader. Ends when the receiver goes away or on quit.
fn read_input(tx: mpsc::UnboundedSender<Input>) -> std::io::Result<()> {
    while !tx.is_closed() {
        if !event::poll(INPUT_POLL)? {
            continue;
        }
        let input = match event::read()? {
            Event::Key(key) if should_quit(key) => Input::Quit,
            Event::Key(key) => match handle_key_event(key) {
                Some(command) => Input::Command(command),
                None => continue,
            },
            Event::Resize(..) => Input::Resize,
            _ => continue,
        };
        if tx.send(input).is_err() {
            break;
        }
    }
    Ok(())
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    // The terminal is in raw mode while playing; logs only ever go to a file.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

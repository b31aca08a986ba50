//! Game loop thread: runs the simulation engine at the configured rate and
//! publishes snapshots.
//!
//! The engine is created inside this thread and never leaves it. Commands
//! arrive via `mpsc` channel; the latest snapshot is stored in shared state
//! for polling. Run outcomes are applied here so records are saved even if
//! the host stops polling.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use galaxy_sim::{SimConfig, SimulationEngine};

use crate::error::AppError;
use crate::outcomes::OutcomeHandler;
use crate::state::{AppState, GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / tick_rate.max(1) as u64)
}

/// Spawns the game loop in a new thread.
///
/// The join handle yields the outcome handler back so the host can read the
/// final records.
pub fn spawn_game_loop(
    config: SimConfig,
    tick_rate: u32,
    handler: OutcomeHandler,
    latest_snapshot: SharedSnapshot,
) -> Result<(AppState, JoinHandle<OutcomeHandler>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let shared = latest_snapshot.clone();

    let handle = std::thread::Builder::new()
        .name("galaxy-game-loop".into())
        .spawn(move || run_game_loop(config, tick_rate, cmd_rx, handler, &shared))?;

    let state = AppState {
        command_tx: cmd_tx,
        latest_snapshot,
    };
    Ok((state, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    tick_rate: u32,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    mut handler: OutcomeHandler,
    latest_snapshot: &SharedSnapshot,
) -> OutcomeHandler {
    let mut engine = SimulationEngine::new(config);
    let period = tick_duration(tick_rate);
    let started = Instant::now();
    let mut next_tick_time = started;
    info!(tick_rate, "game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    debug!(ticks = engine.time().tick, "game loop stopping");
                    return handler;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance to wall-clock time (engine clamps long gaps)
        let now_ms = started.elapsed().as_secs_f64() * 1000.0;
        let snapshot = engine.tick(now_ms);

        // 3. Persist records and dispatch submissions
        handler.handle(engine.take_outcomes());

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += period;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > period * 2 {
            // Too far behind; reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

//! `cyber-galaxy`: headless runner for the Cyber Galaxy simulation.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use galaxy_app::autopilot::Autopilot;
use galaxy_app::config::AppConfig;
use galaxy_app::game_loop;
use galaxy_app::headless;
use galaxy_app::outcomes::OutcomeHandler;
use galaxy_app::records_store::RecordsStore;
use galaxy_app::sink::{FileSink, LogSink, ScoreSink};
use galaxy_app::state::GameLoopCommand;
use galaxy_core::commands::PlayerCommand;
use galaxy_core::state::GameStateSnapshot;
use galaxy_render::DisplayList;

/// Cyber Galaxy arcade simulation
#[derive(Parser)]
#[command(name = "cyber-galaxy")]
#[command(about = "Play Cyber Galaxy headless with a scripted pilot")]
struct Cli {
    /// JSON config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Gameplay tuning file (partial JSON, replaces the config's tuning)
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// RNG seed override
    #[arg(long)]
    seed: Option<u64>,
    /// Records directory override
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Identity used for score submission
    #[arg(long)]
    wallet: Option<String>,
    /// Simulated seconds of play
    #[arg(long, default_value_t = 60.0)]
    seconds: f64,
    /// Runs to start before idling
    #[arg(long, default_value_t = 1)]
    runs: u32,
    /// Pace the game loop in real time instead of simulating flat out
    #[arg(long)]
    realtime: bool,
    /// Write the final frame's draw commands here as JSON
    #[arg(long)]
    dump_frame: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(path) = &cli.tuning {
        config
            .load_tuning(path)
            .with_context(|| format!("Failed to load tuning from {}", path.display()))?;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    if cli.wallet.is_some() {
        config.wallet = cli.wallet;
    }

    let store = RecordsStore::new(&config.data_dir());
    let records = store.load().context("Failed to load records")?;
    info!(path = %store.path().display(), best = records.best_score, "records loaded");

    let sink: Arc<dyn ScoreSink> = match &config.score_log {
        Some(path) => Arc::new(FileSink::new(path)),
        None => Arc::new(LogSink),
    };
    let mut handler = OutcomeHandler::new(store, records.clone(), sink);
    let sim_config = config.sim_config(records);

    let final_snapshot = if cli.realtime {
        let (snapshot, done) = run_realtime(&config, sim_config, handler, cli.seconds, cli.runs)?;
        handler = done;
        snapshot
    } else {
        let report = headless::run(
            sim_config,
            config.wallet.clone(),
            config.tick_rate,
            cli.seconds,
            cli.runs,
            &mut handler,
        );
        info!(ticks = report.ticks, runs = report.runs, "simulation finished");
        Some(report.final_snapshot)
    };

    if let Some(snapshot) = &final_snapshot {
        let hud = &snapshot.hud;
        info!(
            phase = ?snapshot.phase,
            score = hud.score,
            wave = hud.wave,
            lives = hud.lives,
            accuracy = hud.accuracy,
            "final state"
        );
        if let Some(path) = &cli.dump_frame {
            let mut frame = DisplayList::new();
            galaxy_render::project(snapshot, &mut frame);
            std::fs::write(path, serde_json::to_string_pretty(&frame)?)
                .with_context(|| format!("Failed to write frame to {}", path.display()))?;
            info!(commands = frame.len(), path = %path.display(), "frame written");
        }
    }

    let records = handler.records();
    info!(
        best_score = records.best_score,
        best_wave = records.best_wave,
        entries = records.leaderboard.len(),
        "records"
    );
    Ok(())
}

/// Drive the threaded game loop from this thread, polling snapshots.
fn run_realtime(
    config: &AppConfig,
    sim_config: galaxy_sim::SimConfig,
    handler: OutcomeHandler,
    seconds: f64,
    runs: u32,
) -> Result<(Option<GameStateSnapshot>, OutcomeHandler)> {
    let latest = Arc::new(Mutex::new(None));
    let (state, handle) = game_loop::spawn_game_loop(sim_config, config.tick_rate, handler, latest)
        .context("Failed to spawn game loop thread")?;
    state.send(PlayerCommand::SetIdentity {
        wallet: config.wallet.clone(),
    });

    let mut pilot = Autopilot::new(runs);
    let deadline = Instant::now() + Duration::from_secs_f64(seconds.max(0.0));
    while Instant::now() < deadline {
        if let Some(snapshot) = state.latest() {
            for command in pilot.steer(&snapshot) {
                state.send(command);
            }
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    let _ = state.command_tx.send(GameLoopCommand::Shutdown);
    let handler = handle
        .join()
        .map_err(|_| anyhow::anyhow!("game loop thread panicked"))?;
    Ok((state.latest(), handler))
}

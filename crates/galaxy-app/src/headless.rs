//! Headless driver: runs the engine on a synthetic clock as fast as the CPU
//! allows, steered by the autopilot.

use tracing::debug;

use galaxy_core::commands::PlayerCommand;
use galaxy_core::state::GameStateSnapshot;
use galaxy_sim::{SimConfig, SimulationEngine};

use crate::autopilot::Autopilot;
use crate::outcomes::OutcomeHandler;

#[derive(Debug, Clone)]
pub struct HeadlessReport {
    pub ticks: u64,
    pub runs: u32,
    pub final_snapshot: GameStateSnapshot,
}

/// Simulate `seconds` of play at `tick_rate`, starting at most `max_runs`
/// runs. Outcomes are handled as they happen and submissions are awaited.
pub fn run(
    config: SimConfig,
    identity: Option<String>,
    tick_rate: u32,
    seconds: f64,
    max_runs: u32,
    handler: &mut OutcomeHandler,
) -> HeadlessReport {
    let mut engine = SimulationEngine::new(config);
    engine.queue_command(PlayerCommand::SetIdentity { wallet: identity });
    let mut pilot = Autopilot::new(max_runs);

    let step_ms = 1000.0 / tick_rate.max(1) as f64;
    let ticks = (seconds.max(0.0) * 1000.0 / step_ms).ceil() as u64;
    let mut snapshot = engine.tick(0.0);

    for i in 1..=ticks {
        engine.queue_commands(pilot.steer(&snapshot));
        snapshot = engine.tick(i as f64 * step_ms);
        for pending in handler.handle(engine.take_outcomes()) {
            let _ = pending.join();
        }
    }
    debug!(ticks, runs = pilot.runs_started(), "headless session finished");

    HeadlessReport {
        ticks,
        runs: pilot.runs_started(),
        final_snapshot: snapshot,
    }
}

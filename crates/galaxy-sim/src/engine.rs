//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes host commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! and driven by an injected clock, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use galaxy_core::commands::PlayerCommand;
use galaxy_core::components::{Player, Star};
use galaxy_core::constants::MAX_TICK_MS;
use galaxy_core::enums::{GamePhase, PowerUpKind};
use galaxy_core::events::{GameEvent, RunOutcome, RunSummary, ScoreSubmission};
use galaxy_core::records::Records;
use galaxy_core::state::GameStateSnapshot;
use galaxy_core::tuning::Tuning;
use galaxy_core::types::SimTime;
use galaxy_core::weighted::WeightedTable;

use crate::run_state::RunState;
use crate::systems;
use crate::systems::input::InputState;
use crate::systems::snapshot::SnapshotInputs;
use crate::systems::Frame;
use crate::world_setup;

/// Configuration for a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same simulation.
    pub seed: u64,
    pub tuning: Tuning,
    /// Records loaded by the host; best score and wave feed the HUD.
    pub records: Records,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
            records: Records::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    tuning: Tuning,
    drops: WeightedTable<PowerUpKind>,
    records: Records,
    player: Player,
    run: RunState,
    input: InputState,
    stars: Vec<Star>,
    portal_angle: f32,
    identity: Option<String>,
    last_now_ms: Option<f64>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    outcomes: Vec<RunOutcome>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        let SimConfig {
            seed,
            tuning,
            records,
        } = config;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let stars = world_setup::create_stars(&mut rng, tuning.width, tuning.height);
        // Wave 1 stands in formation behind the idle splash.
        let mut world = World::new();
        world_setup::spawn_wave(&mut world, &mut rng, 1, tuning.width);
        let drops = WeightedTable::new(tuning.power_up_weights.iter().copied());
        if drops.is_empty() {
            warn!("all power-up weights are zero; drops disabled");
        }

        Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            player: Player::new(tuning.width, tuning.height, tuning.start_lives),
            run: RunState {
                wave: 1,
                ..Default::default()
            },
            drops,
            records,
            tuning,
            input: InputState::default(),
            stars,
            portal_angle: 0.0,
            identity: None,
            last_now_ms: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            outcomes: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation to host time `now_ms` and return the snapshot.
    ///
    /// Elapsed time is clamped to [`MAX_TICK_MS`]; the first tick after
    /// construction advances nothing.
    pub fn tick(&mut self, now_ms: f64) -> GameStateSnapshot {
        self.advance_clock(now_ms);
        self.process_commands();

        let dt = self.time.dt_ms;
        systems::particles::run(&mut self.world, dt, &mut self.despawn_buffer);
        systems::particles::twinkle(&mut self.stars, now_ms);
        self.portal_angle = (self.portal_angle + dt * 0.001).rem_euclid(std::f32::consts::TAU);

        if self.phase == GamePhase::Running && !self.run.in_overlay(now_ms) {
            self.run_systems();
            self.time.active_ms += dt as f64;
        }
        self.input.fire_requested = false;

        self.build_snapshot()
    }

    /// Build a snapshot of the current state without advancing.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        self.build_snapshot()
    }

    /// Host-facing outcomes (run ended, score submission) since the last call.
    pub fn take_outcomes(&mut self) -> Vec<RunOutcome> {
        std::mem::take(&mut self.outcomes)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    fn advance_clock(&mut self, now_ms: f64) {
        let dt = match self.last_now_ms {
            Some(last) => ((now_ms - last) as f32).clamp(0.0, MAX_TICK_MS),
            None => 0.0,
        };
        self.last_now_ms = Some(self.last_now_ms.map_or(now_ms, |last| last.max(now_ms)));
        self.time.tick += 1;
        self.time.now_ms = now_ms;
        self.time.dt_ms = dt;
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun => {
                if matches!(self.phase, GamePhase::Idle | GamePhase::GameOver) {
                    self.start_run();
                }
            }
            PlayerCommand::Restart => self.start_run(),
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Running => self.phase = GamePhase::Paused,
                GamePhase::Paused => self.phase = GamePhase::Running,
                GamePhase::Idle | GamePhase::GameOver => {}
            },
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                }
            }
            PlayerCommand::Fire => {
                if self.phase == GamePhase::Running {
                    self.input.fire_requested = true;
                }
            }
            PlayerCommand::KeyDown { key } => self.input.set_key(key, true),
            PlayerCommand::KeyUp { key } => self.input.set_key(key, false),
            PlayerCommand::PointerMove { x } => self.input.pointer_x = Some(x),
            PlayerCommand::PointerRelease => self.input.pointer_x = None,
            PlayerCommand::SetTouchDevice { enabled } => self.input.set_touch_device(enabled),
            PlayerCommand::SetAutoFire { enabled } => self.input.auto_fire = enabled,
            PlayerCommand::SetIdentity { wallet } => {
                self.identity = wallet
                    .map(|w| w.trim().to_string())
                    .filter(|w| !w.is_empty());
            }
        }
    }

    /// Rebuild the whole run from scratch and open the wave-1 overlay.
    fn start_run(&mut self) {
        self.world.clear();
        self.player = Player::new(self.tuning.width, self.tuning.height, self.tuning.start_lives);
        self.run = RunState::new(&self.tuning, self.time.now_ms);
        let enemies = world_setup::spawn_wave(&mut self.world, &mut self.rng, 1, self.tuning.width);
        self.input.fire_requested = false;
        self.time.active_ms = 0.0;
        self.phase = GamePhase::Running;
        info!(enemies, "run started");
    }

    /// Run all gameplay systems in order.
    fn run_systems(&mut self) {
        let mut frame = Frame {
            tuning: &self.tuning,
            drops: &self.drops,
            rng: &mut self.rng,
            events: &mut self.events,
            now_ms: self.time.now_ms,
            dt_ms: self.time.dt_ms,
        };
        let world = &mut self.world;
        let player = &mut self.player;
        let run = &mut self.run;
        let (width, height) = (frame.tuning.width, frame.tuning.height);

        // 1. Buff expiry and invulnerability countdown
        systems::player::expire(player, run, &frame);
        // 2. Input sampling and movement
        let intent = systems::input::sample(&self.input, player.pos.x, player.size.w, frame.tuning, frame.dt_secs());
        systems::player::movement(player, &intent, width);
        // 3. Player shooting
        systems::player::shoot(world, player, run, &intent, &mut frame);
        // 4. Formation sway, dive launch and dive trajectories
        systems::formation::run(world, run, &mut frame);
        // 5. Diver fire
        systems::enemy_fire::run(world, player, run, &mut frame);
        // 6. Projectile and missile kinematics
        systems::projectiles::run(world, &mut frame);
        // 7. Guardian drone intercepts
        systems::drone::run(world, player, &mut frame);
        // 8. Out-of-bounds and expired entities
        systems::cleanup::run(world, width, height, &mut self.despawn_buffer);
        // 9. Power-up pickup
        systems::collision::power_ups(world, player, run, &mut frame);
        // 10. Player bullets vs enemies
        systems::collision::player_bullets(world, run, &mut frame);
        // 11. Missiles vs enemies
        systems::collision::missiles(world, run, &mut frame);
        // 12. Enemy fire and contact vs player
        systems::collision::player_hits(world, player, run, &mut frame);
        if player.lives == 0 {
            self.end_run();
            return;
        }
        // 13. Wave completion
        systems::wave::run(world, run, &mut frame, &mut self.despawn_buffer);
    }

    /// Freeze the run, update records and queue the host outcomes.
    fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
        systems::cleanup::clear_gameplay(&mut self.world, &mut self.despawn_buffer);

        let new_best = self.records.update_best(self.run.score, self.run.wave);
        let summary = RunSummary {
            score: self.run.score,
            wave: self.run.wave,
            shots_fired: self.run.shots_fired,
            shots_hit: self.run.shots_hit,
            new_best,
        };
        self.events.push(GameEvent::GameOver);
        self.outcomes.push(RunOutcome::Ended(summary));
        info!(
            score = summary.score,
            wave = summary.wave,
            accuracy = summary.accuracy(),
            new_best,
            "run ended"
        );

        if self.run.submitted || self.run.score == 0 {
            return;
        }
        match &self.identity {
            Some(identity) => {
                self.run.submitted = true;
                self.outcomes.push(RunOutcome::Submit(ScoreSubmission {
                    identity: identity.clone(),
                    score: self.run.score,
                    wave: self.run.wave,
                }));
                debug!(score = self.run.score, "score submission queued");
            }
            None => debug!("no identity; score submission skipped"),
        }
    }

    fn build_snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        let inputs = SnapshotInputs {
            time: &self.time,
            phase: self.phase,
            tuning: &self.tuning,
            player: &self.player,
            run: &self.run,
            records: &self.records,
            stars: &self.stars,
            portal_angle: self.portal_angle,
        };
        systems::snapshot::build_snapshot(&self.world, &inputs, events)
    }
}

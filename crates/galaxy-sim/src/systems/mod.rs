//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` plus whatever run state they
//! touch. They do not own state; per-tick context travels in [`Frame`].

use rand_chacha::ChaCha8Rng;

use galaxy_core::enums::PowerUpKind;
use galaxy_core::events::GameEvent;
use galaxy_core::tuning::Tuning;
use galaxy_core::weighted::WeightedTable;

pub mod cleanup;
pub mod collision;
pub mod combat;
pub mod drone;
pub mod enemy_fire;
pub mod formation;
pub mod input;
pub mod particles;
pub mod player;
pub mod power_ups;
pub mod projectiles;
pub mod snapshot;
pub mod wave;

/// Shared per-tick context handed to the gameplay systems.
pub struct Frame<'a> {
    pub tuning: &'a Tuning,
    pub drops: &'a WeightedTable<PowerUpKind>,
    pub rng: &'a mut ChaCha8Rng,
    pub events: &'a mut Vec<GameEvent>,
    /// Host clock for this tick; deadlines compare against it.
    pub now_ms: f64,
    /// Clamped elapsed time (ms).
    pub dt_ms: f32,
}

impl Frame<'_> {
    pub fn dt_secs(&self) -> f32 {
        self.dt_ms / 1000.0
    }
}

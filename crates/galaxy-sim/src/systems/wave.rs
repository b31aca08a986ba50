//! Wave progression: a cleared formation brings in the next wave.

use hecs::{Entity, World};
use tracing::info;

use galaxy_core::components::{Enemy, EnemyBullet, PowerUp};
use galaxy_core::events::GameEvent;

use super::cleanup;
use super::Frame;
use crate::run_state::RunState;
use crate::world_setup;

/// Advance to the next wave if no enemy is left. Returns true on advance.
///
/// The new formation is spawned in the same tick, enemy bullets and
/// power-ups are swept, and the wave-incoming overlay freezes gameplay.
pub fn run(world: &mut World, run: &mut RunState, frame: &mut Frame, despawn_buffer: &mut Vec<Entity>) -> bool {
    if world.query::<&Enemy>().iter().next().is_some() {
        return false;
    }

    let cleared = run.wave;
    run.wave += 1;
    let spawned = world_setup::spawn_wave(world, frame.rng, run.wave, frame.tuning.width);
    cleanup::despawn_all::<EnemyBullet>(world, despawn_buffer);
    cleanup::despawn_all::<PowerUp>(world, despawn_buffer);
    run.overlay_until_ms = frame.now_ms + frame.tuning.wave_overlay_ms;
    run.dive_timer_ms = frame.tuning.dive_interval_ms(run.wave);

    frame.events.push(GameEvent::WaveComplete { wave: cleared });
    info!(wave = run.wave, enemies = spawned, score = run.score, "wave cleared");
    true
}

//! Enemy fire: divers spend their per-dive shot budget aimed at the player.

use hecs::World;
use rand::Rng;

use galaxy_core::components::{DiveState, Enemy, Hitbox, Player};
use galaxy_core::types::{Position, Velocity};
use galaxy_formation::dive;

use super::Frame;
use crate::run_state::RunState;
use crate::world_setup;

pub fn run(world: &mut World, player: &Player, run: &RunState, frame: &mut Frame) {
    let speed = frame.tuning.enemy_bullet_speed(run.wave);
    let chance = frame.tuning.enemy_fire_chance(run.wave);
    let height = frame.tuning.height;
    let target = player.center().as_vec2();

    let mut shots = Vec::new();
    for (_entity, (_enemy, dive_state, pos, hitbox)) in
        world.query_mut::<(&Enemy, &mut DiveState, &Position, &Hitbox)>()
    {
        if !dive_state.diving || dive_state.shots_fired >= dive_state.shots_allotted {
            continue;
        }
        dive_state.shot_timer_ms -= frame.dt_ms;
        if dive_state.shot_timer_ms > 0.0 {
            continue;
        }
        dive_state.shots_fired += 1;
        dive_state.shot_timer_ms = dive::next_shot_delay(frame.tuning, frame.rng);

        let muzzle = Position::new(pos.x + hitbox.0.w / 2.0, pos.y + hitbox.0.h);
        if muzzle.y >= height || !frame.rng.gen_bool(chance) {
            continue;
        }
        let dir = (target - muzzle.as_vec2()).normalize_or_zero();
        let dir = if dir == glam::Vec2::ZERO { glam::Vec2::Y } else { dir };
        shots.push((muzzle, Velocity::from(dir * speed)));
    }

    for (pos, vel) in shots {
        world_setup::spawn_enemy_bullet(world, pos, vel);
    }
}

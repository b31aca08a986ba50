//! Kinematics for bullets, power-ups and homing missiles.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;

use galaxy_core::components::{Enemy, EnemyBullet, Hitbox, Missile, PlayerBullet, PowerUp};
use galaxy_core::types::{Position, Rect, Velocity};

use super::Frame;
use crate::world_setup::entity_bits;

pub fn run(world: &mut World, frame: &mut Frame) {
    let dt = frame.dt_secs();
    for (_entity, (pos, vel, _)) in world.query_mut::<(&mut Position, &Velocity, &PlayerBullet)>() {
        pos.advance(vel, dt);
    }
    for (_entity, (pos, vel, _)) in world.query_mut::<(&mut Position, &Velocity, &EnemyBullet)>() {
        pos.advance(vel, dt);
    }
    for (_entity, (pos, vel, _)) in world.query_mut::<(&mut Position, &Velocity, &PowerUp)>() {
        pos.advance(vel, dt);
    }
    steer_missiles(world, frame);
}

/// Re-validate each missile's lock, re-acquire a random live enemy when the
/// old target is gone, then blend velocity toward the target at constant
/// speed.
fn steer_missiles(world: &mut World, frame: &mut Frame) {
    let live: Vec<(Entity, Vec2)> = world
        .query::<(&Enemy, &Position, &Hitbox)>()
        .iter()
        .map(|(e, (_, pos, hitbox))| (e, Rect::at(pos, &hitbox.0).center().as_vec2()))
        .collect();

    let speed = frame.tuning.missile_speed;
    let blend = (frame.tuning.missile_turn_rate * frame.dt_secs()).clamp(0.0, 1.0);
    let dt = frame.dt_secs();

    for (_entity, (missile, pos, vel)) in world.query_mut::<(&mut Missile, &mut Position, &mut Velocity)>() {
        let locked = missile
            .target
            .and_then(hecs::Entity::from_bits)
            .and_then(|t| live.iter().find(|(e, _)| *e == t).copied());
        let target = match locked {
            Some(t) => Some(t),
            None if !live.is_empty() => Some(live[frame.rng.gen_range(0..live.len())]),
            None => None,
        };
        missile.target = target.map(|(e, _)| entity_bits(e));

        if let Some((_, aim)) = target {
            let current = vel.as_vec2();
            let desired = (aim - pos.as_vec2()).normalize_or_zero() * speed;
            let steered = (current + (desired - current) * blend).normalize_or_zero() * speed;
            if steered != Vec2::ZERO {
                *vel = Velocity::from(steered);
            }
        }

        pos.advance(vel, dt);
        missile.ttl_ms -= frame.dt_ms;
    }
}

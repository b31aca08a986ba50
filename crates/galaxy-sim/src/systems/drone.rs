//! Guardian drone: orbits the ship and swats enemy bullets.

use hecs::{Entity, World};

use galaxy_core::components::{EnemyBullet, Player};
use galaxy_core::constants::*;
use galaxy_core::enums::Buff;
use galaxy_core::types::Position;

use super::Frame;
use crate::world_setup;

pub fn run(world: &mut World, player: &mut Player, frame: &mut Frame) {
    if !player.buffs.is_active(Buff::GuardianDrone, frame.now_ms) {
        return;
    }
    let tuning = frame.tuning;
    player.drone_angle = (player.drone_angle + tuning.drone_angular_speed * frame.dt_secs())
        .rem_euclid(std::f32::consts::TAU);
    let drone = player.drone_position(tuning.drone_orbit_radius);
    let reach = tuning.drone_intercept_radius + ENEMY_BULLET_RADIUS;

    let hits: Vec<(Entity, Position)> = world
        .query::<(&EnemyBullet, &Position)>()
        .iter()
        .filter(|(_, (_, pos))| pos.distance_to(&drone) <= reach)
        .map(|(e, (_, pos))| (e, *pos))
        .collect();

    for (entity, at) in hits {
        let _ = world.despawn(entity);
        world_setup::spawn_burst(world, frame.rng, at, COLOR_DRONE, DRONE_BURST);
    }
}

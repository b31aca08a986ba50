//! Cleanup system: removes entities that left the playfield or expired.

use hecs::{Entity, World};

use galaxy_core::components::*;
use galaxy_core::constants::{BULLET_MARGIN, MISSILE_MARGIN};
use galaxy_core::types::Position;

/// Remove out-of-bounds projectiles and power-ups plus expired missiles.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, width: f32, height: f32, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let inside = |pos: &Position, margin: f32| {
        pos.x >= -margin && pos.x <= width + margin && pos.y >= -margin && pos.y <= height + margin
    };

    for (entity, (pos, _)) in world.query_mut::<(&Position, &PlayerBullet)>() {
        if !inside(pos, BULLET_MARGIN) {
            despawn_buffer.push(entity);
        }
    }
    for (entity, (pos, _)) in world.query_mut::<(&Position, &EnemyBullet)>() {
        if !inside(pos, BULLET_MARGIN) {
            despawn_buffer.push(entity);
        }
    }
    for (entity, (pos, _)) in world.query_mut::<(&Position, &PowerUp)>() {
        if pos.y > height + BULLET_MARGIN {
            despawn_buffer.push(entity);
        }
    }
    for (entity, (pos, missile)) in world.query_mut::<(&Position, &Missile)>() {
        if missile.ttl_ms <= 0.0 || !inside(pos, MISSILE_MARGIN) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Despawn every entity carrying component `T`.
pub fn despawn_all<T: hecs::Component>(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    despawn_buffer.extend(world.query_mut::<&T>().into_iter().map(|(e, _)| e));
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Drop all gameplay entities, leaving only cosmetic particles.
pub fn clear_gameplay(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_all::<Enemy>(world, despawn_buffer);
    despawn_all::<PlayerBullet>(world, despawn_buffer);
    despawn_all::<EnemyBullet>(world, despawn_buffer);
    despawn_all::<Missile>(world, despawn_buffer);
    despawn_all::<PowerUp>(world, despawn_buffer);
}

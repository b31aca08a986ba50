//! Entity spawn factories.
//!
//! Every entity kind gets one factory so component bundles stay consistent
//! between systems and tests.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use galaxy_core::components::*;
use galaxy_core::constants::*;
use galaxy_core::enums::*;
use galaxy_core::types::{Position, Rgb, Size, Velocity};
use galaxy_formation::layout;

/// Spawn the full formation for `wave`. Returns the number of enemies.
pub fn spawn_wave(world: &mut World, rng: &mut ChaCha8Rng, wave: u32, width: f32) -> usize {
    let spawns = layout::spawn_wave(wave, width, rng);
    let count = spawns.len();
    for s in spawns {
        spawn_enemy(world, s.tier, s.home, s.hp as f32, s.wobble);
    }
    count
}

/// Spawn one formation enemy sitting on its home slot.
pub fn spawn_enemy(world: &mut World, tier: EnemyTier, home: Position, hp: f32, wobble: f32) -> Entity {
    let profile = tier_profile(tier);
    world.spawn((
        Enemy {
            tier,
            hp,
            max_hp: hp,
            home,
            wobble,
        },
        DiveState::default(),
        home,
        Hitbox(profile.size),
    ))
}

/// Player shot centered on `pos`.
pub fn spawn_player_bullet(
    world: &mut World,
    pos: Position,
    vel: Velocity,
    size: Size,
    piercing: bool,
    weak: bool,
) -> Entity {
    world.spawn((
        PlayerBullet {
            piercing,
            weak,
            pierced: Vec::new(),
            landed: false,
        },
        pos,
        vel,
        Hitbox(size),
    ))
}

pub fn spawn_enemy_bullet(world: &mut World, pos: Position, vel: Velocity) -> Entity {
    let d = ENEMY_BULLET_RADIUS * 2.0;
    world.spawn((EnemyBullet, pos, vel, Hitbox(Size::new(d, d))))
}

pub fn spawn_missile(
    world: &mut World,
    pos: Position,
    vel: Velocity,
    target: Option<Entity>,
    ttl_ms: f32,
) -> Entity {
    world.spawn((
        Missile {
            target: target.map(entity_bits),
            ttl_ms,
        },
        pos,
        vel,
        Hitbox(MISSILE_SIZE),
    ))
}

/// Falling capsule centered on `pos`.
pub fn spawn_power_up(world: &mut World, kind: PowerUpKind, pos: Position, fall_speed: f32) -> Entity {
    world.spawn((
        PowerUp { kind },
        pos,
        Velocity::new(0.0, fall_speed),
        Hitbox(Size::new(POWER_UP_SIZE, POWER_UP_SIZE)),
    ))
}

/// Radial particle burst around `at`.
pub fn spawn_burst(world: &mut World, rng: &mut ChaCha8Rng, at: Position, color: Rgb, count: usize) {
    for _ in 0..count {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(PARTICLE_MIN_SPEED..PARTICLE_MAX_SPEED);
        spawn_particle(
            world,
            at,
            Velocity::new(angle.cos() * speed, angle.sin() * speed),
            color,
            rng.gen_range(1.0..4.0),
        );
    }
}

/// Single-particle sparks scattered over the whole playfield.
pub fn spawn_flash(world: &mut World, rng: &mut ChaCha8Rng, width: f32, height: f32, count: usize) {
    for _ in 0..count {
        let at = Position::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
        spawn_burst(world, rng, at, COLOR_WHITE, 1);
    }
}

fn spawn_particle(world: &mut World, pos: Position, vel: Velocity, color: Rgb, radius: f32) -> Entity {
    world.spawn((
        Particle {
            life: 1.0,
            color,
            radius,
        },
        pos,
        vel,
    ))
}

/// Background star field.
pub fn create_stars(rng: &mut ChaCha8Rng, width: f32, height: f32) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(0.0..height),
            radius: rng.gen_range(0.3..1.8),
            alpha: rng.gen(),
            twinkle_speed: rng.gen_range(0.05..0.45),
        })
        .collect()
}

pub fn entity_bits(entity: Entity) -> EntityBits {
    entity.to_bits().get()
}

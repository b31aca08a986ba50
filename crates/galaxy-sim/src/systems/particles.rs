//! Cosmetic particles and star twinkle. Runs in every phase.

use hecs::{Entity, World};

use galaxy_core::components::{Particle, Star};
use galaxy_core::constants::{PARTICLE_DECAY, PARTICLE_GRAVITY};
use galaxy_core::types::{Position, Velocity};

/// Integrate particles under gravity and fade them out.
pub fn run(world: &mut World, dt_ms: f32, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    let dt = dt_ms / 1000.0;

    for (entity, (particle, pos, vel)) in world.query_mut::<(&mut Particle, &mut Position, &mut Velocity)>() {
        pos.advance(vel, dt);
        vel.y += PARTICLE_GRAVITY * dt;
        particle.life -= PARTICLE_DECAY * dt;
        if particle.life <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

pub fn twinkle(stars: &mut [Star], now_ms: f64) {
    for star in stars {
        let phase = now_ms * 0.001 * star.twinkle_speed as f64 + star.x as f64;
        star.alpha = (0.3 + phase.sin() as f32 * 0.7).clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_core::types::Rgb;

    #[test]
    fn test_particles_fall_and_fade() {
        let mut world = World::new();
        let e = world.spawn((
            Particle {
                life: 1.0,
                color: Rgb(255, 255, 255),
                radius: 2.0,
            },
            Position::new(0.0, 0.0),
            Velocity::new(0.0, 0.0),
        ));
        let mut buffer = Vec::new();
        run(&mut world, 100.0, &mut buffer);
        {
            let p = world.get::<&Particle>(e).unwrap();
            assert!((p.life - 0.8).abs() < 1e-5);
            let v = world.get::<&Velocity>(e).unwrap();
            assert!(v.y > 0.0);
        }
        for _ in 0..5 {
            run(&mut world, 100.0, &mut buffer);
        }
        assert!(!world.contains(e));
    }

    #[test]
    fn test_twinkle_alpha_in_range() {
        let mut stars = vec![
            Star {
                x: 10.0,
                y: 10.0,
                radius: 1.0,
                alpha: 0.5,
                twinkle_speed: 0.3,
            };
            4
        ];
        for i in 0..100 {
            twinkle(&mut stars, i as f64 * 123.0);
            assert!(stars.iter().all(|s| (0.0..=1.0).contains(&s.alpha)));
        }
    }
}
